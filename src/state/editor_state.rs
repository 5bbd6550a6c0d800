//! The pointer state machine of the editor.
//!
//! ```text
//!            press with a drawing tool
//!   Idle ─────────────────────────────► Dragging ──┐
//!     ▲                                    │  ▲     │ move
//!     └────────────────────────────────────┘  └─────┘
//!       release, leave or tool change
//! ```
//!
//! Moves only update `current`; the scene is written once, on release.

use crate::element::{Shape, ShapeKind, StyleContext, create_shape};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No drag in progress
    #[default]
    Idle,
    /// A drag session with a drawing tool
    Dragging {
        kind: ShapeKind,
        start: Point,
        current: Point,
    },
}

impl EditorState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }

    /// The shape the drag would commit if released at its current point
    pub fn provisional_shape(&self, style: &StyleContext) -> Option<Shape> {
        match self {
            EditorState::Dragging {
                kind,
                start,
                current,
            } => create_shape(*kind, *start, *current, style),
            EditorState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_preview() {
        let state = EditorState::Idle;
        assert!(!state.is_dragging());
        assert_eq!(state.provisional_shape(&StyleContext::default()), None);
    }

    #[test]
    fn test_dragging_preview_follows_current_point() {
        let state = EditorState::Dragging {
            kind: ShapeKind::Circle,
            start: Point::new(0, 0),
            current: Point::new(3, 4),
        };
        let shape = state.provisional_shape(&StyleContext::default());
        assert!(matches!(shape, Some(Shape::Circle { radius: 5, .. })));
    }
}
