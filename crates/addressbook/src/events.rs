//! Event shapes emitted by the addressbook handlers.

use bazaar_runtime::{message_event, Event};
use bazaar_types::AddressRecord;

pub const MODULE_NAME: &str = "addressbook";

pub const EVENT_TYPE_CREATE_ADDRESS: &str = "create_address";
pub const EVENT_TYPE_UPDATE_ADDRESS: &str = "update_address";
pub const EVENT_TYPE_DELETE_ADDRESS: &str = "delete_address";

pub const ATTRIBUTE_KEY_CREATOR: &str = "creator";
pub const ATTRIBUTE_KEY_NETWORK: &str = "network";
pub const ATTRIBUTE_KEY_LABEL: &str = "label";
pub const ATTRIBUTE_KEY_VALUE: &str = "value";

fn record_event(kind: &str, record: &AddressRecord) -> Event {
    Event::new(kind)
        .attribute(ATTRIBUTE_KEY_CREATOR, &record.creator)
        .attribute(ATTRIBUTE_KEY_NETWORK, &record.network)
        .attribute(ATTRIBUTE_KEY_LABEL, &record.label)
        .attribute(ATTRIBUTE_KEY_VALUE, &record.value)
}

/// Events for an accepted `CreateAddress`.
pub fn create_address_events(record: &AddressRecord) -> [Event; 2] {
    [
        record_event(EVENT_TYPE_CREATE_ADDRESS, record),
        message_event(MODULE_NAME, &record.creator),
    ]
}

/// Events for an accepted `UpdateAddress`.
pub fn update_address_events(record: &AddressRecord) -> [Event; 2] {
    [
        record_event(EVENT_TYPE_UPDATE_ADDRESS, record),
        message_event(MODULE_NAME, &record.creator),
    ]
}

/// Events for an accepted `DeleteAddress`.
pub fn delete_address_events(creator: &str, network: &str, label: &str) -> [Event; 2] {
    [
        Event::new(EVENT_TYPE_DELETE_ADDRESS)
            .attribute(ATTRIBUTE_KEY_CREATOR, creator)
            .attribute(ATTRIBUTE_KEY_NETWORK, network)
            .attribute(ATTRIBUTE_KEY_LABEL, label),
        message_event(MODULE_NAME, creator),
    ]
}
