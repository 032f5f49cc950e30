/// The drawing state machine.
///
/// A single pointer drives the canvas, so at most one drawing session is
/// active at any time.
///
/// ```text
///              press
/// ┌──────────┐ ─────────► ┌─────────────┐
/// │   Idle   │            │   Drawing   │ ◄── enter cell
/// └──────────┘ ◄───────── └─────────────┘     (applies tool)
///           release / leave
/// ```
///
/// A press applies the active tool once to the pressed cell, so a click with
/// no drag still paints. Enter events only apply the tool while `Drawing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Pointer is up, or outside the canvas
    #[default]
    Idle,
    /// Pointer is held down over the canvas
    Drawing,
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
        }
    }
}
