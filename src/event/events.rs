use crate::color::Color;
use crate::tool::Tool;

/// Notifications from the editor to the UI shell
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The tool buttons should highlight `new`
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    /// The palette and custom color picker should reflect `new`
    ColorChanged {
        old: Color,
        new: Color,
    },
    CanvasCleared,
    ExportEvent(ExportEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    Started {
        id: u64,
    },
    Ready {
        id: u64,
        file_name: String,
        location: String,
    },
    Failed {
        id: u64,
        reason: String,
    },
}
