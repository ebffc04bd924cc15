//! Structured events recorded during call execution.
//!
//! Events are the append-only notification trail consumed by external
//! indexers. Each event has a kind and a list of string attributes; a
//! module emits its domain event first, followed by the generic `message`
//! event attributing the call, and indexers rely on that ordering.

use serde::{Deserialize, Serialize};

/// Kind of the generic per-message event.
pub const EVENT_TYPE_MESSAGE: &str = "message";

/// Attribute key naming the module that handled the message.
pub const ATTRIBUTE_KEY_MODULE: &str = "module";

/// Attribute key naming the account that sent the message.
pub const ATTRIBUTE_KEY_SENDER: &str = "sender";

/// A single key/value attribute of an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

/// A structured, append-only record of a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(EventAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// The generic `message` event every handled call appends after its domain
/// events.
pub fn message_event(module: &str, sender: &str) -> Event {
    Event::new(EVENT_TYPE_MESSAGE)
        .attribute(ATTRIBUTE_KEY_MODULE, module)
        .attribute(ATTRIBUTE_KEY_SENDER, sender)
}

/// Ordered sink for events emitted while executing a call.
#[derive(Debug, Default)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn emit_all(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
