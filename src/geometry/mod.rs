//! Pure geometric helpers shared by shape construction, rendering and hit testing.

use egui::Pos2;
use serde::{Deserialize, Serialize};

pub mod hit_testing;

/// Angular step used when plotting arcs, in radians.
///
/// The generated driver helper uses the same value, so preview and hardware plot the same points.
pub const ARC_STEP: f64 = 0.05;

/// An integer canvas coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a fractional position to the nearest canvas pixel
    pub fn rounded(x: f32, y: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::rounded(pos.x, pos.y)
    }
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    let (dx, dy) = offset(a, b);
    dx.hypot(dy)
}

/// `b - a`, taken in floating point so extreme coordinates cannot overflow
fn offset(a: Point, b: Point) -> (f64, f64) {
    (f64::from(b.x) - f64::from(a.x), f64::from(b.y) - f64::from(a.y))
}

/// Angle of `to` seen from `from`, in radians in `[-π, π]`
pub fn angle_between(from: Point, to: Point) -> f64 {
    let (dx, dy) = offset(from, to);
    dy.atan2(dx)
}

/// Is `point` within `tolerance` of the segment `start..end`?
///
/// The perpendicular distance is measured to the infinite line, and the projection of the
/// point must fall on the segment itself. A zero-length segment behaves like a point.
pub fn point_near_segment(point: Point, start: Point, end: Point, tolerance: f64) -> bool {
    let (dx, dy) = offset(start, end);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return distance(point, start) <= tolerance;
    }

    let (px, py) = (f64::from(point.x), f64::from(point.y));
    let (sx, sy) = (f64::from(start.x), f64::from(start.y));
    let (ex, ey) = (f64::from(end.x), f64::from(end.y));

    let perpendicular = (dy * px - dx * py + ex * sy - ey * sx).abs() / length_sq.sqrt();
    let t = ((px - sx) * dx + (py - sy) * dy) / length_sq;

    perpendicular <= tolerance && (0.0..=1.0).contains(&t)
}

/// Barycentric containment test.
///
/// Accepts `u >= 0`, `v >= 0` and `u + v < 1`: the edge `b..c` is excluded while the
/// other two edges are included. Degenerate triangles contain nothing.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let v0 = offset(a, c);
    let v1 = offset(a, b);
    let v2 = offset(a, p);

    let dot00 = v0.0 * v0.0 + v0.1 * v0.1;
    let dot01 = v0.0 * v1.0 + v0.1 * v1.1;
    let dot02 = v0.0 * v2.0 + v0.1 * v2.1;
    let dot11 = v1.0 * v1.0 + v1.1 * v1.1;
    let dot12 = v1.0 * v2.0 + v1.1 * v2.1;

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        return false;
    }
    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

/// Order an arc's angles so the sweep is non-negative
pub fn ordered_angles(start: f64, end: f64) -> (f64, f64) {
    if start > end { (end, start) } else { (start, end) }
}

/// The pixels the driver-side arc helper plots.
///
/// Walks from the smaller to the larger angle in `step` increments, truncating each
/// coordinate toward zero like an `int` assignment does, then plots the exact end point.
pub fn arc_points(center: Point, radius: i32, start: f64, end: f64, step: f64) -> Vec<Point> {
    let (start, end) = ordered_angles(start, end);
    let plot = |angle: f64| {
        let r = f64::from(radius);
        Point::new(
            (f64::from(center.x) + r * angle.cos()).trunc() as i32,
            (f64::from(center.y) + r * angle.sin()).trunc() as i32,
        )
    };

    let mut points = Vec::new();
    if !(start.is_finite() && end.is_finite()) || step <= 0.0 {
        return points;
    }

    let mut angle = start;
    while angle <= end {
        points.push(plot(angle));
        angle += step;
    }
    points.push(plot(end));
    points
}
