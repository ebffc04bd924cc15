//! Marketplace module: auctions and bids.
//!
//! This module keeps the authoritative record of auctions and, for each,
//! the current winning bid, and enforces the admission rules a new bid must
//! pass before the record is replaced.
//!
//! # Architecture
//!
//! - `call`: message types for state-changing operations
//! - `handlers`: thin message handlers that unwrap the transaction context,
//!   invoke the keeper, and emit events
//! - `keeper`: the auction ledger state transitions
//! - `admission`: pure bid admission rules, testable without storage
//! - `state`: store-backed ledger accessors
//! - `events`: event shapes consumed by external indexers
//! - `queries`: read-only state access
//! - `genesis`: initial configuration
//! - `error`: error types

pub mod admission;
pub mod call;
pub mod error;
pub mod events;
pub mod genesis;
pub mod handlers;
pub mod keeper;
pub mod queries;
pub mod state;

pub use admission::{admit, AdmissionVerdict};
pub use call::MarketplaceCall;
pub use error::MarketplaceError;
pub use genesis::MarketplaceGenesis;
pub use handlers::HandlerResult;
pub use queries::{MarketplaceQuery, MarketplaceQueryResponse};
pub use state::MarketplaceState;
