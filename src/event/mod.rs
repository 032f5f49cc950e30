mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EditorEvent, ExportEvent};
pub use handlers::LogEventHandler;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}
