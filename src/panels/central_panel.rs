use crate::DesignerApp;
use crate::input::{CanvasTransform, route_event};
use crate::painter_surface::PainterSurface;
use crate::state::PointerDown;

pub fn central_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let config = app.editor().config();
        let scale = config.preview_scale;
        let size = config.canvas_extent();

        ui.vertical_centered(|ui| {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(size, size) * scale, egui::Sense::click_and_drag());
            let transform = CanvasTransform::new(response.rect.min, scale, size);

            // Canvas input waits while the text prompt is open
            if !app.is_prompting() {
                let events = app.input_mut().process_input(ctx, &transform);
                for event in &events {
                    if let Some(PointerDown::TextRequested(at)) = route_event(app.editor_mut(), event) {
                        app.open_text_prompt(at);
                    }
                }
            }

            let cursor = response
                .hover_pos()
                .filter(|pos| transform.contains(*pos))
                .map(|pos| transform.to_canvas(pos));
            app.set_cursor(cursor);

            let mask = app.editor().background().to_color32();
            let mut surface = PainterSurface::new(&painter, response.rect, scale, mask);
            app.editor().render(&mut surface);

            match app.cursor() {
                Some(point) => ui.label(format!("X: {}, Y: {}", point.x, point.y)),
                None => ui.label("X: -, Y: -"),
            };
            if let Some(tool) = app.editor().tool() {
                ui.label(format!("Tool: {}", tool.label()));
            }
        });
    });
}
