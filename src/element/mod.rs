use std::fmt;

use crate::color::Rgb565;
use crate::geometry::{self, Point};

pub mod property;

pub use property::{PropertyError, PropertyKey, PropertyValue};

/// Stroke width used when nothing else is configured
pub const DEFAULT_STROKE_WIDTH: i32 = 1;

/// Height in pixels of one text size step; a size 2 glyph box is 16 pixels tall.
pub const TEXT_PIXELS_PER_SIZE: i32 = 8;

/// The six primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rect,
    Circle,
    Triangle,
    Text,
    Arc,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Line,
        ShapeKind::Rect,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Text,
        ShapeKind::Arc,
    ];

    /// Short lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Text => "text",
            ShapeKind::Arc => "arc",
        }
    }

    /// Human readable name for shape lists
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Text => "Text",
            ShapeKind::Arc => "Arc",
        }
    }

    /// Only closed outlines can be filled; lines and arcs are always stroked.
    pub fn can_fill(&self) -> bool {
        matches!(self, ShapeKind::Rect | ShapeKind::Circle | ShapeKind::Triangle)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The current drawing settings applied to newly created shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleContext {
    pub color: Rgb565,
    pub stroke_width: i32,
    pub filled: bool,
    pub font_size: u8,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            color: Rgb565::RED,
            stroke_width: DEFAULT_STROKE_WIDTH,
            filled: false,
            font_size: 1,
        }
    }
}

/// One placed primitive.
///
/// Angles are radians. The triangle's third vertex is derived from the drag
/// (`x3 = x1`, `y3 = y2`) at creation time but is freely editable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb565,
        stroke_width: i32,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
        stroke_width: i32,
        filled: bool,
    },
    Circle {
        x: i32,
        y: i32,
        radius: i32,
        color: Rgb565,
        stroke_width: i32,
        filled: bool,
    },
    Triangle {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Rgb565,
        stroke_width: i32,
        filled: bool,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgb565,
        size: u8,
    },
    Arc {
        x: i32,
        y: i32,
        radius: i32,
        start_angle: f64,
        end_angle: f64,
        color: Rgb565,
        stroke_width: i32,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Text { .. } => ShapeKind::Text,
            Shape::Arc { .. } => ShapeKind::Arc,
        }
    }

    pub fn color(&self) -> Rgb565 {
        match self {
            Shape::Line { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Text { color, .. }
            | Shape::Arc { color, .. } => *color,
        }
    }

    /// Stroke width, `None` for text
    pub fn stroke_width(&self) -> Option<i32> {
        match self {
            Shape::Line { stroke_width, .. }
            | Shape::Rect { stroke_width, .. }
            | Shape::Circle { stroke_width, .. }
            | Shape::Triangle { stroke_width, .. }
            | Shape::Arc { stroke_width, .. } => Some(*stroke_width),
            Shape::Text { .. } => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        match self {
            Shape::Rect { filled, .. }
            | Shape::Circle { filled, .. }
            | Shape::Triangle { filled, .. } => *filled,
            _ => false,
        }
    }

    /// Keep an arc's sweep non-negative by swapping reversed angles
    pub(crate) fn normalize_arc(&mut self) {
        if let Shape::Arc {
            start_angle,
            end_angle,
            ..
        } = self
        {
            if *start_angle > *end_angle {
                std::mem::swap(start_angle, end_angle);
            }
        }
    }
}

/// Build a shape from the two points of a drag.
///
/// Returns `None` for kinds that are not created by dragging (text is placed with a
/// prompt, see [`create_text`]).
pub fn create_shape(kind: ShapeKind, start: Point, end: Point, style: &StyleContext) -> Option<Shape> {
    let color = style.color;
    let stroke_width = style.stroke_width.max(DEFAULT_STROKE_WIDTH);

    let shape = match kind {
        ShapeKind::Line => Shape::Line {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            color,
            stroke_width,
        },
        ShapeKind::Rect => Shape::Rect {
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
            color,
            stroke_width,
            filled: style.filled,
        },
        ShapeKind::Circle => Shape::Circle {
            x: start.x,
            y: start.y,
            radius: geometry::distance(start, end).round() as i32,
            color,
            stroke_width,
            filled: style.filled,
        },
        ShapeKind::Triangle => Shape::Triangle {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            x3: start.x,
            y3: end.y,
            color,
            stroke_width,
            filled: style.filled,
        },
        // Sweeps start at angle 0 and run toward the release point.
        ShapeKind::Arc => Shape::Arc {
            x: start.x,
            y: start.y,
            radius: geometry::distance(start, end).round() as i32,
            start_angle: geometry::angle_between(start, start),
            end_angle: geometry::angle_between(start, end),
            color,
            stroke_width,
        },
        ShapeKind::Text => return None,
    };

    Some(shape)
}

/// Place a text shape; empty text creates nothing.
pub fn create_text(at: Point, text: &str, style: &StyleContext) -> Option<Shape> {
    if text.is_empty() {
        return None;
    }
    Some(Shape::Text {
        x: at.x,
        y: at.y,
        text: text.to_string(),
        color: style.color,
        size: style.font_size,
    })
}
