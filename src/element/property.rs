//! Named, typed access to shape fields for property edits.

use std::fmt;

use thiserror::Error;

use super::{Shape, ShapeKind};
use crate::color::Rgb565;
use crate::config::EditorConfig;

/// An editable field of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    X,
    Y,
    X1,
    Y1,
    X2,
    Y2,
    X3,
    Y3,
    Width,
    Height,
    Radius,
    StartAngle,
    EndAngle,
    Color,
    StrokeWidth,
    Filled,
    Text,
    Size,
}

impl PropertyKey {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKey::X => "X",
            PropertyKey::Y => "Y",
            PropertyKey::X1 => "X1",
            PropertyKey::Y1 => "Y1",
            PropertyKey::X2 => "X2",
            PropertyKey::Y2 => "Y2",
            PropertyKey::X3 => "X3",
            PropertyKey::Y3 => "Y3",
            PropertyKey::Width => "Width",
            PropertyKey::Height => "Height",
            PropertyKey::Radius => "Radius",
            PropertyKey::StartAngle => "Start angle (rad)",
            PropertyKey::EndAngle => "End angle (rad)",
            PropertyKey::Color => "Color",
            PropertyKey::StrokeWidth => "Stroke width",
            PropertyKey::Filled => "Filled",
            PropertyKey::Text => "Text",
            PropertyKey::Size => "Size",
        }
    }

    fn is_coordinate(&self) -> bool {
        matches!(
            self,
            PropertyKey::X
                | PropertyKey::Y
                | PropertyKey::X1
                | PropertyKey::Y1
                | PropertyKey::X2
                | PropertyKey::Y2
                | PropertyKey::X3
                | PropertyKey::Y3
        )
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A new value for a property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Int(i32),
    Float(f64),
    Bool(bool),
    Text(String),
    Color(Rgb565),
}

impl PropertyValue {
    fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "an integer",
            PropertyValue::Float(_) => "a number",
            PropertyValue::Bool(_) => "a flag",
            PropertyValue::Text(_) => "text",
            PropertyValue::Color(_) => "a color",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Text(v) => write!(f, "{v:?}"),
            PropertyValue::Color(v) => write!(f, "{v}"),
        }
    }
}

/// Errors from editing a shape property
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("{kind} shapes have no {key} property")]
    NotApplicable { kind: ShapeKind, key: PropertyKey },

    #[error("{key} expects {expected}, got {found}")]
    TypeMismatch {
        key: PropertyKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{key} = {value} is outside {min}..={max}")]
    OutOfRange {
        key: PropertyKey,
        value: PropertyValue,
        min: i64,
        max: i64,
    },

    #[error("invalid {key}: {reason}")]
    Invalid { key: PropertyKey, reason: String },
}

fn mismatch(key: PropertyKey, expected: &'static str, value: &PropertyValue) -> PropertyError {
    PropertyError::TypeMismatch {
        key,
        expected,
        found: value.type_name(),
    }
}

impl Shape {
    /// The properties an editor form offers for this shape, in display order
    pub fn property_keys(&self) -> &'static [PropertyKey] {
        use PropertyKey as K;
        match self.kind() {
            ShapeKind::Line => &[K::Color, K::X1, K::Y1, K::X2, K::Y2, K::StrokeWidth],
            ShapeKind::Rect => &[K::Color, K::X, K::Y, K::Width, K::Height, K::StrokeWidth, K::Filled],
            ShapeKind::Circle => &[K::Color, K::X, K::Y, K::Radius, K::StrokeWidth, K::Filled],
            ShapeKind::Triangle => &[
                K::Color,
                K::X1,
                K::Y1,
                K::X2,
                K::Y2,
                K::X3,
                K::Y3,
                K::StrokeWidth,
                K::Filled,
            ],
            ShapeKind::Text => &[K::Color, K::X, K::Y, K::Text, K::Size],
            ShapeKind::Arc => &[
                K::Color,
                K::X,
                K::Y,
                K::Radius,
                K::StartAngle,
                K::EndAngle,
                K::StrokeWidth,
            ],
        }
    }

    fn int_field(&self, key: PropertyKey) -> Option<i32> {
        use PropertyKey as K;
        match (self, key) {
            (Shape::Line { x1, .. }, K::X1) => Some(*x1),
            (Shape::Line { y1, .. }, K::Y1) => Some(*y1),
            (Shape::Line { x2, .. }, K::X2) => Some(*x2),
            (Shape::Line { y2, .. }, K::Y2) => Some(*y2),
            (Shape::Rect { x, .. }, K::X) => Some(*x),
            (Shape::Rect { y, .. }, K::Y) => Some(*y),
            (Shape::Rect { width, .. }, K::Width) => Some(*width),
            (Shape::Rect { height, .. }, K::Height) => Some(*height),
            (Shape::Circle { x, .. }, K::X) => Some(*x),
            (Shape::Circle { y, .. }, K::Y) => Some(*y),
            (Shape::Circle { radius, .. }, K::Radius) => Some(*radius),
            (Shape::Triangle { x1, .. }, K::X1) => Some(*x1),
            (Shape::Triangle { y1, .. }, K::Y1) => Some(*y1),
            (Shape::Triangle { x2, .. }, K::X2) => Some(*x2),
            (Shape::Triangle { y2, .. }, K::Y2) => Some(*y2),
            (Shape::Triangle { x3, .. }, K::X3) => Some(*x3),
            (Shape::Triangle { y3, .. }, K::Y3) => Some(*y3),
            (Shape::Text { x, .. }, K::X) => Some(*x),
            (Shape::Text { y, .. }, K::Y) => Some(*y),
            (Shape::Arc { x, .. }, K::X) => Some(*x),
            (Shape::Arc { y, .. }, K::Y) => Some(*y),
            (Shape::Arc { radius, .. }, K::Radius) => Some(*radius),
            (
                Shape::Line { stroke_width, .. }
                | Shape::Rect { stroke_width, .. }
                | Shape::Circle { stroke_width, .. }
                | Shape::Triangle { stroke_width, .. }
                | Shape::Arc { stroke_width, .. },
                K::StrokeWidth,
            ) => Some(*stroke_width),
            _ => None,
        }
    }

    fn int_slot(&mut self, key: PropertyKey) -> Option<&mut i32> {
        use PropertyKey as K;
        match (self, key) {
            (Shape::Line { x1, .. }, K::X1) => Some(x1),
            (Shape::Line { y1, .. }, K::Y1) => Some(y1),
            (Shape::Line { x2, .. }, K::X2) => Some(x2),
            (Shape::Line { y2, .. }, K::Y2) => Some(y2),
            (Shape::Rect { x, .. }, K::X) => Some(x),
            (Shape::Rect { y, .. }, K::Y) => Some(y),
            (Shape::Rect { width, .. }, K::Width) => Some(width),
            (Shape::Rect { height, .. }, K::Height) => Some(height),
            (Shape::Circle { x, .. }, K::X) => Some(x),
            (Shape::Circle { y, .. }, K::Y) => Some(y),
            (Shape::Circle { radius, .. }, K::Radius) => Some(radius),
            (Shape::Triangle { x1, .. }, K::X1) => Some(x1),
            (Shape::Triangle { y1, .. }, K::Y1) => Some(y1),
            (Shape::Triangle { x2, .. }, K::X2) => Some(x2),
            (Shape::Triangle { y2, .. }, K::Y2) => Some(y2),
            (Shape::Triangle { x3, .. }, K::X3) => Some(x3),
            (Shape::Triangle { y3, .. }, K::Y3) => Some(y3),
            (Shape::Text { x, .. }, K::X) => Some(x),
            (Shape::Text { y, .. }, K::Y) => Some(y),
            (Shape::Arc { x, .. }, K::X) => Some(x),
            (Shape::Arc { y, .. }, K::Y) => Some(y),
            (Shape::Arc { radius, .. }, K::Radius) => Some(radius),
            (
                Shape::Line { stroke_width, .. }
                | Shape::Rect { stroke_width, .. }
                | Shape::Circle { stroke_width, .. }
                | Shape::Triangle { stroke_width, .. }
                | Shape::Arc { stroke_width, .. },
                K::StrokeWidth,
            ) => Some(stroke_width),
            _ => None,
        }
    }

    fn angle_slot(&mut self, key: PropertyKey) -> Option<&mut f64> {
        match (self, key) {
            (Shape::Arc { start_angle, .. }, PropertyKey::StartAngle) => Some(start_angle),
            (Shape::Arc { end_angle, .. }, PropertyKey::EndAngle) => Some(end_angle),
            _ => None,
        }
    }

    /// Read a property, `None` when the shape has no such field
    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        if let Some(v) = self.int_field(key) {
            return Some(PropertyValue::Int(v));
        }
        match (self, key) {
            (Shape::Arc { start_angle, .. }, PropertyKey::StartAngle) => Some(PropertyValue::Float(*start_angle)),
            (Shape::Arc { end_angle, .. }, PropertyKey::EndAngle) => Some(PropertyValue::Float(*end_angle)),
            (_, PropertyKey::Color) => Some(PropertyValue::Color(self.color())),
            (
                Shape::Rect { filled, .. }
                | Shape::Circle { filled, .. }
                | Shape::Triangle { filled, .. },
                PropertyKey::Filled,
            ) => Some(PropertyValue::Bool(*filled)),
            (Shape::Text { text, .. }, PropertyKey::Text) => Some(PropertyValue::Text(text.clone())),
            (Shape::Text { size, .. }, PropertyKey::Size) => Some(PropertyValue::Int(i32::from(*size))),
            _ => None,
        }
    }

    /// Write a property in place.
    ///
    /// Only checks that the key exists on this kind and that the value has the right type.
    /// Range checks belong to [`validate`].
    pub fn set_property(&mut self, key: PropertyKey, value: PropertyValue) -> Result<(), PropertyError> {
        let kind = self.kind();
        let not_applicable = PropertyError::NotApplicable { kind, key };

        match key {
            PropertyKey::Color => {
                let new_color = match value {
                    PropertyValue::Color(c) => c,
                    other => return Err(mismatch(key, "a color", &other)),
                };
                match self {
                    Shape::Line { color, .. }
                    | Shape::Rect { color, .. }
                    | Shape::Circle { color, .. }
                    | Shape::Triangle { color, .. }
                    | Shape::Text { color, .. }
                    | Shape::Arc { color, .. } => *color = new_color,
                }
                Ok(())
            }
            PropertyKey::Filled => {
                let flag = match value {
                    PropertyValue::Bool(b) => b,
                    other => return Err(mismatch(key, "a flag", &other)),
                };
                match self {
                    Shape::Rect { filled, .. }
                    | Shape::Circle { filled, .. }
                    | Shape::Triangle { filled, .. } => {
                        *filled = flag;
                        Ok(())
                    }
                    _ => Err(not_applicable),
                }
            }
            PropertyKey::Text => {
                let new_text = match value {
                    PropertyValue::Text(t) => t,
                    other => return Err(mismatch(key, "text", &other)),
                };
                match self {
                    Shape::Text { text, .. } => {
                        *text = new_text;
                        Ok(())
                    }
                    _ => Err(not_applicable),
                }
            }
            PropertyKey::Size => {
                let new_size = match value {
                    PropertyValue::Int(v) => v,
                    other => return Err(mismatch(key, "an integer", &other)),
                };
                let Shape::Text { size, .. } = self else {
                    return Err(not_applicable);
                };
                *size = u8::try_from(new_size).map_err(|_| PropertyError::OutOfRange {
                    key,
                    value: PropertyValue::Int(new_size),
                    min: 0,
                    max: i64::from(u8::MAX),
                })?;
                Ok(())
            }
            PropertyKey::StartAngle | PropertyKey::EndAngle => {
                let angle = match value {
                    PropertyValue::Float(v) => v,
                    PropertyValue::Int(v) => f64::from(v),
                    other => return Err(mismatch(key, "a number", &other)),
                };
                let slot = self.angle_slot(key).ok_or(not_applicable)?;
                *slot = angle;
                self.normalize_arc();
                Ok(())
            }
            _ => {
                let new_value = match value {
                    PropertyValue::Int(v) => v,
                    other => return Err(mismatch(key, "an integer", &other)),
                };
                let slot = self.int_slot(key).ok_or(not_applicable)?;
                *slot = new_value;
                Ok(())
            }
        }
    }
}

fn check_int_range(key: PropertyKey, value: &PropertyValue, min: i64, max: i64) -> Result<(), PropertyError> {
    match value {
        PropertyValue::Int(v) if (min..=max).contains(&i64::from(*v)) => Ok(()),
        PropertyValue::Int(_) => Err(PropertyError::OutOfRange {
            key,
            value: value.clone(),
            min,
            max,
        }),
        other => Err(mismatch(key, "an integer", other)),
    }
}

/// Arc angles accepted by [`validate`]; one full turn either way
pub const ANGLE_RANGE: std::ops::RangeInclusive<f64> = -std::f64::consts::TAU..=std::f64::consts::TAU;

/// Range checks applied in front of [`Shape::set_property`]
pub fn validate(key: PropertyKey, value: &PropertyValue, config: &EditorConfig) -> Result<(), PropertyError> {
    let canvas = i64::from(config.canvas_size);

    match key {
        k if k.is_coordinate() => check_int_range(key, value, 0, canvas),
        PropertyKey::Width | PropertyKey::Height => check_int_range(key, value, 1, canvas),
        PropertyKey::Radius => check_int_range(key, value, 1, (canvas / 2).max(1)),
        PropertyKey::StrokeWidth => check_int_range(key, value, 1, i64::from(i32::MAX)),
        PropertyKey::Size => {
            let PropertyValue::Int(size) = value else {
                return Err(mismatch(key, "an integer", value));
            };
            let allowed = u8::try_from(*size).is_ok_and(|s| config.font_sizes.contains(&s));
            if allowed {
                Ok(())
            } else {
                Err(PropertyError::Invalid {
                    key,
                    reason: format!("text size {size} is not one of {:?}", config.font_sizes),
                })
            }
        }
        PropertyKey::StartAngle | PropertyKey::EndAngle => {
            let angle = match value {
                PropertyValue::Float(v) => *v,
                PropertyValue::Int(v) => f64::from(*v),
                other => return Err(mismatch(key, "a number", other)),
            };
            if ANGLE_RANGE.contains(&angle) {
                Ok(())
            } else {
                Err(PropertyError::Invalid {
                    key,
                    reason: format!(
                        "angle {angle} is outside {}..={} radians",
                        ANGLE_RANGE.start(),
                        ANGLE_RANGE.end()
                    ),
                })
            }
        }
        _ => Ok(()),
    }
}
