use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::{EditorEvent, EventHandler};

/// Broadcasts editor events to registered handlers, and queues them for the UI to drain
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
    pending: RefCell<VecDeque<EditorEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
        self.pending.borrow_mut().push_back(event);
    }

    /// Takes every event emitted since the last drain, oldest first
    pub fn drain(&self) -> Vec<EditorEvent> {
        self.pending.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<EditorEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &EditorEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_emit_reaches_handlers_and_queue() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        bus.subscribe(Box::new(Recorder(seen.clone())));

        bus.emit(EditorEvent::CanvasCleared);

        assert_eq!(*seen.lock().unwrap(), vec![EditorEvent::CanvasCleared]);
        assert_eq!(bus.drain(), vec![EditorEvent::CanvasCleared]);
        assert!(bus.drain().is_empty());
    }
}
