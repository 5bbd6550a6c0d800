use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Stroke, vec2};

use crate::renderer::{Surface, TextMeasure};

/// Segments per quarter circle in the clip mask
const MASK_SEGMENTS: usize = 32;

fn measure_with_fonts(ctx: &egui::Context, text: &str, font_px: f32) -> f32 {
    if text.is_empty() || font_px <= 0.0 {
        return 0.0;
    }
    ctx.fonts(|fonts| {
        fonts
            .layout_no_wrap(text.to_owned(), FontId::proportional(font_px), Color32::WHITE)
            .size()
            .x
    })
}

/// Text metrics from egui's font system, used for hit testing in the app
#[derive(Clone)]
pub struct EguiTextMeasure {
    ctx: egui::Context,
}

impl EguiTextMeasure {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for EguiTextMeasure {
    fn text_width(&self, text: &str, font_px: f32) -> f32 {
        measure_with_fonts(&self.ctx, text, font_px)
    }
}

/// Draws canvas coordinates into a screen rect of an egui [`Painter`].
///
/// egui can only clip to rectangles. A circle clip is approximated by painting the four
/// corner regions outside the disk with `mask_color` when the clip is popped, which is
/// correct as long as the mask color matches what was painted underneath (the background).
pub struct PainterSurface {
    painter: Painter,
    origin: Pos2,
    scale: f32,
    mask_color: Color32,
    clip: Option<(Pos2, f32)>,
}

impl PainterSurface {
    pub fn new(painter: &Painter, screen_rect: Rect, scale: f32, mask_color: Color32) -> Self {
        Self {
            painter: painter.with_clip_rect(screen_rect),
            origin: screen_rect.min,
            scale,
            mask_color,
            clip: None,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2() * self.scale
    }

    fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }

    fn stroke(&self, width: f32, color: Color32) -> Stroke {
        Stroke::new(width.max(1.0) * self.scale, color)
    }

    /// Fans from each corner of the disk's bounding square over the area outside the disk
    fn paint_corner_mask(&self, center: Pos2, radius: f32) {
        let center = self.to_screen(center);
        let radius = radius * self.scale;
        let corners = [
            (vec2(-1.0, -1.0), std::f32::consts::PI),
            (vec2(1.0, -1.0), -std::f32::consts::FRAC_PI_2),
            (vec2(1.0, 1.0), 0.0),
            (vec2(-1.0, 1.0), std::f32::consts::FRAC_PI_2),
        ];

        let mut mesh = Mesh::default();
        for (direction, start) in corners {
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(center + direction * radius, self.mask_color);
            for i in 0..=MASK_SEGMENTS {
                let angle = start + std::f32::consts::FRAC_PI_2 * i as f32 / MASK_SEGMENTS as f32;
                let on_circle = center + vec2(angle.cos(), angle.sin()) * radius;
                mesh.colored_vertex(on_circle, self.mask_color);
            }
            for i in 0..MASK_SEGMENTS as u32 {
                mesh.add_triangle(base, base + 1 + i, base + 2 + i);
            }
        }
        self.painter.add(egui::Shape::mesh(mesh));
    }
}

impl TextMeasure for PainterSurface {
    fn text_width(&self, text: &str, font_px: f32) -> f32 {
        measure_with_fonts(self.painter.ctx(), text, font_px)
    }
}

impl Surface for PainterSurface {
    // egui repaints from scratch every frame
    fn clear(&mut self) {}

    fn push_circle_clip(&mut self, center: Pos2, radius: f32) {
        self.clip = Some((center, radius));
    }

    fn pop_clip(&mut self) {
        if let Some((center, radius)) = self.clip.take() {
            self.paint_corner_mask(center, radius);
        }
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.stroke(width, color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32) {
        self.painter
            .rect_stroke(self.rect_to_screen(rect), 0.0, self.stroke(width, color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(self.rect_to_screen(rect), 0.0, color);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius * self.scale,
            self.stroke(width, color),
        );
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius * self.scale, color);
    }

    fn stroke_polygon(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::closed_line(points, self.stroke(width, color)));
    }

    /// Convex polygons only, which covers triangles
    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn plot(&mut self, at: Pos2, size: f32, color: Color32) {
        let dot = Rect::from_min_size(at, vec2(size.max(1.0), size.max(1.0)));
        self.painter.rect_filled(self.rect_to_screen(dot), 0.0, color);
    }

    fn fill_text(&mut self, top_left: Pos2, text: &str, font_px: f32, color: Color32) {
        self.painter.text(
            self.to_screen(top_left),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(font_px * self.scale),
            color,
        );
    }
}
