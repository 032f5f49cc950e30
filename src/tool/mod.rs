use serde::{Deserialize, Serialize};

/// The drawing tools available to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Paints the cell under the pointer
    #[default]
    Pen,
    /// Returns the cell under the pointer to the background
    Eraser,
    /// Paint bucket
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pen, Tool::Eraser, Tool::Fill];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pen => "✏",
            Self::Eraser => "⌫",
            Self::Fill => "🪣",
        }
    }
}

/// How the fill tool decides which cells to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Every cell of the canvas, whatever was clicked
    #[default]
    WholeCanvas,
    /// The 4-connected region of cells matching the clicked one
    Contiguous,
}

impl FillMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WholeCanvas => "whole canvas",
            Self::Contiguous => "contiguous",
        }
    }
}
