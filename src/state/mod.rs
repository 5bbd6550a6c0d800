mod editor_state;
pub mod context;

pub use editor_state::EditorState;
pub use context::{EditorContext, PointerDown};
