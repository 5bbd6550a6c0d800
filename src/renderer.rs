use egui::{Color32, Pos2, Rect, pos2, vec2};

use crate::color::Rgb565;
use crate::config::EditorConfig;
use crate::element::{Shape, TEXT_PIXELS_PER_SIZE};
use crate::geometry::{self, ARC_STEP, Point};
use crate::scene::Scene;

/// Measures rendered text width; hit testing text needs the same metric as drawing it.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_px: f32) -> f32;
}

/// Generic sans-serif estimate: every character advances 0.6 em.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApproxSansMetrics;

impl ApproxSansMetrics {
    pub const ADVANCE_EM: f32 = 0.6;
}

impl TextMeasure for ApproxSansMetrics {
    fn text_width(&self, text: &str, font_px: f32) -> f32 {
        text.chars().count() as f32 * font_px * Self::ADVANCE_EM
    }
}

/// A pixel surface in canvas coordinates with stroke, fill, text and a circular clip.
pub trait Surface: TextMeasure {
    /// Reset every pixel, ignoring any clip
    fn clear(&mut self);

    /// Restrict later drawing to a disk until [`Surface::pop_clip`]
    fn push_circle_clip(&mut self, center: Pos2, radius: f32);

    fn pop_clip(&mut self);

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Closed outline through `points`
    fn stroke_polygon(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32);

    /// A `size` by `size` dot whose top-left corner is `at`
    fn plot(&mut self, at: Pos2, size: f32, color: Color32);

    /// Text whose glyph box starts at `top_left`
    fn fill_text(&mut self, top_left: Pos2, text: &str, font_px: f32, color: Color32);
}

/// Paints a scene onto a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    canvas_size: f32,
}

impl Renderer {
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size: canvas_size as f32,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.canvas_size)
    }

    /// Background edge to edge, then every shape in scene order clipped to the display disk.
    pub fn render(&self, surface: &mut dyn Surface, scene: &Scene, background: Rgb565) {
        self.render_with_preview(surface, scene, background, None);
    }

    /// Like [`Renderer::render`], with one provisional shape drawn over the committed ones.
    pub fn render_with_preview(
        &self,
        surface: &mut dyn Surface,
        scene: &Scene,
        background: Rgb565,
        preview: Option<&Shape>,
    ) {
        surface.clear();
        let full = Rect::from_min_size(Pos2::ZERO, vec2(self.canvas_size, self.canvas_size));
        surface.fill_rect(full, background.to_color32());

        let half = self.canvas_size / 2.0;
        surface.push_circle_clip(pos2(half, half), half);
        for shape in scene.shapes().iter().chain(preview) {
            self.draw_shape(surface, shape);
        }
        surface.pop_clip();
    }

    pub fn draw_shape(&self, surface: &mut dyn Surface, shape: &Shape) {
        let color = shape.color().to_color32();
        let width = shape.stroke_width().unwrap_or(1) as f32;
        let at = |x: i32, y: i32| Point::new(x, y).to_pos2();

        match shape {
            Shape::Line { x1, y1, x2, y2, .. } => {
                surface.stroke_line(at(*x1, *y1), at(*x2, *y2), width, color);
            }
            Shape::Rect {
                x,
                y,
                width: w,
                height: h,
                filled,
                ..
            } => {
                let rect = Rect::from_min_size(at(*x, *y), vec2(*w as f32, *h as f32));
                if *filled {
                    surface.fill_rect(rect, color);
                } else {
                    surface.stroke_rect(rect, width, color);
                }
            }
            Shape::Circle {
                x, y, radius, filled, ..
            } => {
                if *filled {
                    surface.fill_circle(at(*x, *y), *radius as f32, color);
                } else {
                    surface.stroke_circle(at(*x, *y), *radius as f32, width, color);
                }
            }
            Shape::Triangle {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                filled,
                ..
            } => {
                let points = [at(*x1, *y1), at(*x2, *y2), at(*x3, *y3)];
                if *filled {
                    surface.fill_polygon(&points, color);
                } else {
                    surface.stroke_polygon(&points, width, color);
                }
            }
            Shape::Text { x, y, text, size, .. } => {
                let font_px = (i32::from(*size) * TEXT_PIXELS_PER_SIZE) as f32;
                surface.fill_text(at(*x, *y), text, font_px, color);
            }
            // Same points the exported drawArc helper plots.
            Shape::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                let points = geometry::arc_points(Point::new(*x, *y), *radius, *start_angle, *end_angle, ARC_STEP);
                for point in points {
                    surface.plot(point.to_pos2(), width, color);
                }
            }
        }
    }
}
