use crate::config::EditorConfig;
use crate::element::{Shape, TEXT_PIXELS_PER_SIZE};
use crate::geometry::{self, Point};
use crate::renderer::TextMeasure;
use crate::scene::Scene;

/// Finds the topmost shape under a canvas point.
///
/// Outlines are what selects: circles and arcs are hit on an annulus around their
/// radius even when filled. Tolerance is the shape's stroke width plus `margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    canvas_size: f64,
    margin: f64,
}

impl HitTester {
    pub fn new(canvas_size: u32, margin: f64) -> Self {
        Self {
            canvas_size: f64::from(canvas_size),
            margin,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.canvas_size, config.hit_margin)
    }

    /// Is the point on the visible disk of the display?
    pub fn is_on_canvas(&self, point: Point) -> bool {
        let half = self.canvas_size / 2.0;
        let dx = f64::from(point.x) - half;
        let dy = f64::from(point.y) - half;
        dx.hypot(dy) <= half
    }

    /// Index of the topmost shape containing `point`, scanning from last to first
    pub fn hit_test(&self, scene: &Scene, point: Point, metrics: &dyn TextMeasure) -> Option<usize> {
        if !self.is_on_canvas(point) {
            return None;
        }

        scene
            .shapes()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| self.shape_contains(shape, point, metrics))
            .map(|(index, _)| index)
    }

    fn tolerance(&self, stroke_width: i32) -> f64 {
        f64::from(stroke_width) + self.margin
    }

    fn on_ring(&self, point: Point, center: Point, radius: i32, stroke_width: i32) -> bool {
        let tolerance = self.tolerance(stroke_width);
        let distance = geometry::distance(point, center);
        let radius = f64::from(radius);
        distance >= radius - tolerance && distance <= radius + tolerance
    }

    pub fn shape_contains(&self, shape: &Shape, point: Point, metrics: &dyn TextMeasure) -> bool {
        match shape {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                ..
            } => geometry::point_near_segment(
                point,
                Point::new(*x1, *y1),
                Point::new(*x2, *y2),
                self.tolerance(*stroke_width),
            ),
            Shape::Rect {
                x, y, width, height, ..
            } => {
                let (px, py) = (i64::from(point.x), i64::from(point.y));
                let (left, top) = (i64::from(*x), i64::from(*y));
                px >= left && px <= left + i64::from(*width) && py >= top && py <= top + i64::from(*height)
            }
            Shape::Circle {
                x,
                y,
                radius,
                stroke_width,
                ..
            } => self.on_ring(point, Point::new(*x, *y), *radius, *stroke_width),
            Shape::Triangle {
                x1, y1, x2, y2, x3, y3, ..
            } => geometry::point_in_triangle(
                point,
                Point::new(*x1, *y1),
                Point::new(*x2, *y2),
                Point::new(*x3, *y3),
            ),
            Shape::Text { x, y, text, size, .. } => {
                let height = i32::from(*size) * TEXT_PIXELS_PER_SIZE;
                let width = f64::from(metrics.text_width(text, height as f32));
                let (px, py) = (f64::from(point.x), f64::from(point.y));
                px >= f64::from(*x)
                    && px <= f64::from(*x) + width
                    && py >= f64::from(*y)
                    && py <= f64::from(*y) + f64::from(height)
            }
            // Uses the same swapped range as the generated arc helper. Sweeps that cross
            // the ±π seam are not wrapped.
            Shape::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                stroke_width,
                ..
            } => {
                let center = Point::new(*x, *y);
                if !self.on_ring(point, center, *radius, *stroke_width) {
                    return false;
                }
                let (start, end) = geometry::ordered_angles(*start_angle, *end_angle);
                let angle = geometry::angle_between(center, point);
                angle >= start && angle <= end
            }
        }
    }
}
