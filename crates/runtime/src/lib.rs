//! Host-framework collaborator surfaces for the bazaar chain modules.
//!
//! The surrounding state-machine framework provides three things to a
//! module: an ordered key-value store with prefix iteration, a per-call
//! transaction context carrying block height and the event sink, and
//! message routing. This crate models the first two explicitly so module
//! logic can be written and tested against them:
//!
//! - `store`: the `KvStore` trait, the in-memory `MemStore`, and the borsh
//!   codec helpers used for typed access
//! - `context`: the explicitly passed `TxContext`
//! - `events`: structured `Event` records and the `EventManager` sink
//! - `pagination`: offset/cursor pagination over prefix scans

pub mod context;
pub mod events;
pub mod pagination;
pub mod store;

pub use context::TxContext;
pub use events::{
    message_event, Event, EventAttribute, EventManager, ATTRIBUTE_KEY_MODULE,
    ATTRIBUTE_KEY_SENDER, EVENT_TYPE_MESSAGE,
};
pub use pagination::paginate_prefix;
pub use store::{KvStore, MemStore, StoreError};
