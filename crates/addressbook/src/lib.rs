//! Addressbook module: a registry of remote addresses.
//!
//! Records are keyed by `(creator, network, label)`; each maps to the
//! registered remote address on the named network. The module follows the
//! same layout as the marketplace: call messages, thin handlers, a
//! store-backed state, queries, and genesis.

pub mod call;
pub mod error;
pub mod events;
pub mod genesis;
pub mod handlers;
pub mod queries;
pub mod state;

pub use call::AddressbookCall;
pub use error::AddressbookError;
pub use genesis::AddressbookGenesis;
pub use queries::{AddressbookQuery, AddressbookQueryResponse};
pub use state::AddressbookState;
