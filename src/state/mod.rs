mod editor_state;
mod controller;
pub mod context;

pub use editor_state::EditorState;
pub use controller::{PointerEvent, Repaint, ToolController};
pub use context::EditorContext;
