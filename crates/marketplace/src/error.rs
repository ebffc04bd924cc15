//! Marketplace module error types.

use bazaar_runtime::StoreError;
use thiserror::Error;

/// Errors that can occur in the marketplace module.
///
/// Every variant is terminal for the enclosing transaction; nothing is
/// retried and handlers forward these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketplaceError {
    #[error("auction not found: {0}")]
    NotFound(u64),

    #[error("auction {0} is not accepting bids")]
    AuctionClosed(u64),

    #[error("auction {0} is still live")]
    AuctionLive(u64),

    #[error("bid too low: must exceed {minimum}, got {got}")]
    BidTooLow { minimum: u128, got: u128 },

    #[error("seller cannot bid on own auction")]
    SelfBid,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
