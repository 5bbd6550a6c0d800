use crate::DesignerApp;

pub fn code_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("code_panel")
        .resizable(true)
        .default_height(220.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Arduino code");
                if ui.button("Generate").clicked() {
                    app.regenerate_code();
                }
                if ui.button("Copy").clicked() {
                    ctx.copy_text(app.generated_code().to_owned());
                    log::info!("Copied {} bytes of code", app.generated_code().len());
                }
            });
            ui.separator();

            egui::ScrollArea::both()
                .id_salt("generated_code")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut code = app.generated_code();
                    ui.add(
                        egui::TextEdit::multiline(&mut code)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
        });
}
