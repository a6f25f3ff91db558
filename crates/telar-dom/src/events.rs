//! Event Listener Registration
//!
//! Listeners are registered per event name and invoked in registration
//! order. Registering a second handler for the same event adds it, it never
//! replaces the first. Cancellation handles are not exposed.

use std::fmt;
use std::rc::Rc;

/// Dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
        }
    }
}

/// Unary event handler
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// Ordered listener registrations for one element
#[derive(Clone, Default)]
pub struct ListenerList {
    entries: Vec<(String, EventHandler)>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event name
    pub fn add(&mut self, event_type: &str, handler: EventHandler) {
        self.entries.push((event_type.to_string(), handler));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handlers registered for an event name, in registration order
    pub fn for_event<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a EventHandler> {
        self.entries
            .iter()
            .filter(move |(name, _)| name.as_str() == event_type)
            .map(|(_, handler)| handler)
    }

    /// Invoke matching handlers in registration order, returning how many ran
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut invoked = 0;
        for handler in self.for_event(&event.event_type) {
            handler(event);
            invoked += 1;
        }
        tracing::trace!(event = %event.event_type, invoked, "dispatched event");
        invoked
    }
}

impl fmt::Debug for ListenerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.entries.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("ListenerList").field("events", &names).finish()
    }
}
