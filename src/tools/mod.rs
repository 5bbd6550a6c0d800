use std::fmt;

use crate::element::ShapeKind;

/// What a pointer press on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Create a shape of this kind. Text is placed with a prompt instead of a drag.
    Draw(ShapeKind),
    /// Remove the topmost shape under the pointer
    Delete,
}

impl Tool {
    /// Every tool in toolbar order
    pub const ALL: [Tool; 7] = [
        Tool::Draw(ShapeKind::Line),
        Tool::Draw(ShapeKind::Rect),
        Tool::Draw(ShapeKind::Circle),
        Tool::Draw(ShapeKind::Triangle),
        Tool::Draw(ShapeKind::Text),
        Tool::Draw(ShapeKind::Arc),
        Tool::Delete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Draw(kind) => kind.name(),
            Tool::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Draw(kind) => kind.label(),
            Tool::Delete => "Delete",
        }
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Draw(kind) => Some(*kind),
            Tool::Delete => None,
        }
    }

    /// Does a press with this tool start a drag session?
    pub fn starts_drag(&self) -> bool {
        matches!(self, Tool::Draw(kind) if *kind != ShapeKind::Text)
    }
}

impl From<ShapeKind> for Tool {
    fn from(kind: ShapeKind) -> Self {
        Tool::Draw(kind)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_of_tool() {
        assert_eq!(Tool::from(ShapeKind::Arc).shape_kind(), Some(ShapeKind::Arc));
        assert_eq!(Tool::Delete.shape_kind(), None);
        assert_eq!(Tool::Delete.to_string(), "delete");
    }

    #[test]
    fn test_only_drawing_tools_drag() {
        assert!(Tool::Draw(ShapeKind::Rect).starts_drag());
        assert!(!Tool::Draw(ShapeKind::Text).starts_drag());
        assert!(!Tool::Delete.starts_drag());
    }
}
