//! Headless software surface backed by a `tiny_skia::Pixmap`.
//!
//! Pixels are addressed by their integer coordinate, the same convention the display
//! driver and the hit tester use, so outlines are drawn through pixel centers. Paints are
//! aliased to keep every written pixel an exact palette color. Text is drawn as solid
//! glyph cells sized with [`ApproxSansMetrics`]; the interactive preview uses real fonts
//! instead.

use egui::{Color32, Pos2, Rect};
use tiny_skia::{FillRule, LineCap, LineJoin, Mask, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::renderer::{ApproxSansMetrics, Surface, TextMeasure};

/// Moves integer pixel coordinates onto pixel centers
fn pixel_centers() -> Transform {
    Transform::from_translate(0.5, 0.5)
}

pub struct RasterSurface {
    pixmap: Pixmap,
    clip: Option<Mask>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("clipped", &self.clip.is_some())
            .finish()
    }
}

impl RasterSurface {
    /// A transparent square surface of `size` by `size` pixels, or `None` for a zero size
    pub fn new(size: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(size, size)?,
            clip: None,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let p = self.pixmap.pixel(x, y)?;
        Some(Color32::from_rgba_premultiplied(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Count pixels of exactly this color
    pub fn count(&self, color: Color32) -> usize {
        let target = color.to_array();
        self.pixmap
            .pixels()
            .iter()
            .filter(|p| [p.red(), p.green(), p.blue(), p.alpha()] == target)
            .count()
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color32) {
        let stroke = Stroke {
            width: width.max(1.0),
            line_cap: LineCap::Square,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, pixel_centers(), self.clip.as_ref());
    }

    fn fill_path(&mut self, path: &Path, color: Color32) {
        self.pixmap.fill_path(
            path,
            &paint(color),
            FillRule::EvenOdd,
            pixel_centers(),
            self.clip.as_ref(),
        );
    }
}

fn paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

fn polygon_path(points: &[Pos2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.close();
    pb.finish()
}

impl TextMeasure for RasterSurface {
    fn text_width(&self, text: &str, font_px: f32) -> f32 {
        ApproxSansMetrics.text_width(text, font_px)
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn push_circle_clip(&mut self, center: Pos2, radius: f32) {
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        if let Some(circle) = PathBuilder::from_circle(center.x, center.y, radius) {
            mask.fill_path(&circle, FillRule::Winding, false, Transform::identity());
        }
        self.clip = Some(mask);
    }

    fn pop_clip(&mut self) {
        self.clip = None;
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        if from == to {
            let offset = ((width.round().max(1.0) - 1.0) / 2.0).floor();
            self.plot(Pos2::new(from.x - offset, from.y - offset), width, color);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, width, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32) {
        let corners = [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
        self.stroke_polygon(&corners, width, color);
    }

    /// Half-open: a 10 wide rect at x = 0 covers pixels 0..=9
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let Some(rect) = tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), self.clip.as_ref());
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        if let Some(circle) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.stroke_path(&circle, width, color);
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if let Some(circle) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill_path(&circle, color);
        }
    }

    fn stroke_polygon(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if let Some(path) = polygon_path(points) {
            self.stroke_path(&path, width, color);
        }
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        if let Some(path) = polygon_path(points) {
            self.fill_path(&path, color);
            // Edges belong to the filled shape too
            self.stroke_path(&path, 1.0, color);
        }
    }

    fn plot(&mut self, at: Pos2, size: f32, color: Color32) {
        let size = size.round().max(1.0);
        let dot = Rect::from_min_size(Pos2::new(at.x.floor(), at.y.floor()), egui::vec2(size, size));
        self.fill_rect(dot, color);
    }

    fn fill_text(&mut self, top_left: Pos2, text: &str, font_px: f32, color: Color32) {
        let advance = font_px * ApproxSansMetrics::ADVANCE_EM;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = top_left.x + i as f32 * advance;
            let cell = Rect::from_min_size(
                Pos2::new(x, top_left.y + font_px * 0.125),
                egui::vec2((advance * 0.8).max(1.0), (font_px * 0.75).max(1.0)),
            );
            self.fill_rect(cell, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(size: u32) -> RasterSurface {
        RasterSurface::new(size).unwrap()
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = surface(8);
        assert_eq!(surface.pixel(0, 0), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(8, 0), None);
        assert!(RasterSurface::new(0).is_none());
    }

    #[test]
    fn test_fill_rect_is_half_open() {
        let mut surface = surface(20);
        surface.fill_rect(Rect::from_min_size(Pos2::new(2.0, 3.0), egui::vec2(4.0, 5.0)), Color32::RED);
        assert_eq!(surface.count(Color32::RED), 20);
        assert_eq!(surface.pixel(2, 3), Some(Color32::RED));
        assert_eq!(surface.pixel(5, 7), Some(Color32::RED));
        assert_eq!(surface.pixel(6, 7), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_line_reaches_both_ends() {
        let mut surface = surface(20);
        surface.stroke_line(Pos2::new(1.0, 1.0), Pos2::new(15.0, 9.0), 1.0, Color32::WHITE);
        assert_eq!(surface.pixel(1, 1), Some(Color32::WHITE));
        assert_eq!(surface.pixel(15, 9), Some(Color32::WHITE));
        assert_eq!(surface.pixel(15, 1), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(1, 9), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_zero_length_line_plots_a_dot() {
        let mut surface = surface(10);
        surface.stroke_line(Pos2::new(4.0, 4.0), Pos2::new(4.0, 4.0), 1.0, Color32::WHITE);
        assert_eq!(surface.pixel(4, 4), Some(Color32::WHITE));
        assert_eq!(surface.count(Color32::WHITE), 1);
    }

    #[test]
    fn test_plot_covers_exact_square() {
        let mut surface = surface(10);
        surface.plot(Pos2::new(3.0, 5.0), 2.0, Color32::GREEN);
        assert_eq!(surface.count(Color32::GREEN), 4);
        assert_eq!(surface.pixel(4, 6), Some(Color32::GREEN));
        assert_eq!(surface.pixel(5, 5), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_circle_clip() {
        let mut surface = surface(20);
        surface.push_circle_clip(Pos2::new(10.0, 10.0), 10.0);
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, egui::vec2(20.0, 20.0)), Color32::BLUE);
        surface.pop_clip();
        assert_eq!(surface.pixel(0, 0), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(10, 10), Some(Color32::BLUE));
        assert_eq!(surface.pixel(10, 0), Some(Color32::BLUE));

        // Released clip no longer masks the corners
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, egui::vec2(1.0, 1.0)), Color32::RED);
        assert_eq!(surface.pixel(0, 0), Some(Color32::RED));
    }

    #[test]
    fn test_clear_ignores_clip() {
        let mut surface = surface(10);
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, egui::vec2(10.0, 10.0)), Color32::RED);
        surface.push_circle_clip(Pos2::new(5.0, 5.0), 1.0);
        surface.clear();
        assert_eq!(surface.count(Color32::RED), 0);
    }

    #[test]
    fn test_filled_triangle_covers_interior() {
        let mut surface = surface(20);
        let tri = [Pos2::new(0.0, 0.0), Pos2::new(16.0, 0.0), Pos2::new(0.0, 16.0)];
        surface.fill_polygon(&tri, Color32::WHITE);
        assert_eq!(surface.pixel(3, 3), Some(Color32::WHITE));
        assert_eq!(surface.pixel(14, 14), Some(Color32::TRANSPARENT));
    }
}
