use crate::event::{EditorEvent, EventHandler, ExportEvent};

/// Writes every editor event to the log
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ToolChanged { old, new } => {
                log::debug!("Tool changed: {} -> {}", old.name(), new.name());
            }
            EditorEvent::ColorChanged { old, new } => {
                log::debug!("Color changed: {} -> {}", old, new);
            }
            EditorEvent::CanvasCleared => log::info!("Canvas cleared"),
            EditorEvent::ExportEvent(ExportEvent::Started { id }) => {
                log::info!("Export #{} started", id);
            }
            EditorEvent::ExportEvent(ExportEvent::Ready { id, location, .. }) => {
                log::info!("Export #{} saved to {}", id, location);
            }
            EditorEvent::ExportEvent(ExportEvent::Failed { id, reason }) => {
                log::error!("Export #{} failed: {}", id, reason);
            }
        }
    }
}
