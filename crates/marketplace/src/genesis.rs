//! Genesis configuration for the marketplace module.

use bazaar_runtime::store::KvStore;
use bazaar_types::{Auction, Bid};
use serde::{Deserialize, Serialize};

use crate::error::MarketplaceError;
use crate::state::MarketplaceState;

/// A standing bid carried over at genesis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisBid {
    pub auction_id: u64,
    pub bid: Bid,
}

/// Genesis configuration for the marketplace module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketplaceGenesis {
    /// Next auction id to assign; must exceed every listed auction id.
    pub next_auction_id: u64,

    /// Auctions existing at chain start.
    pub auctions: Vec<Auction>,

    /// Current winning bids existing at chain start, at most one per
    /// auction.
    pub bids: Vec<GenesisBid>,
}

impl Default for MarketplaceGenesis {
    fn default() -> Self {
        Self {
            next_auction_id: 1,
            auctions: Vec::new(),
            bids: Vec::new(),
        }
    }
}

impl MarketplaceGenesis {
    /// Validate the genesis configuration.
    pub fn validate(&self) -> Result<(), GenesisValidationError> {
        if self.next_auction_id == 0 {
            return Err(GenesisValidationError::InvalidNextAuctionId(
                "next auction id cannot be zero".into(),
            ));
        }

        let mut seen = std::collections::BTreeSet::new();
        for auction in &self.auctions {
            if !seen.insert(auction.id) {
                return Err(GenesisValidationError::DuplicateAuction(auction.id));
            }
            if auction.id >= self.next_auction_id {
                return Err(GenesisValidationError::InvalidNextAuctionId(format!(
                    "auction id {} is not below next auction id {}",
                    auction.id, self.next_auction_id
                )));
            }
            if auction.seller.is_empty() || auction.denom.is_empty() {
                return Err(GenesisValidationError::InvalidAuction {
                    id: auction.id,
                    reason: "seller and denomination must be non-empty".into(),
                });
            }
            if auction.start_height >= auction.end_height {
                return Err(GenesisValidationError::InvalidAuction {
                    id: auction.id,
                    reason: "start height must precede end height".into(),
                });
            }
        }

        let mut bid_seen = std::collections::BTreeSet::new();
        for entry in &self.bids {
            if !bid_seen.insert(entry.auction_id) {
                return Err(GenesisValidationError::InvalidBid {
                    auction_id: entry.auction_id,
                    reason: "more than one bid for the auction".into(),
                });
            }
            let auction = self
                .auctions
                .iter()
                .find(|a| a.id == entry.auction_id)
                .ok_or(GenesisValidationError::UnknownBidAuction(entry.auction_id))?;
            if entry.bid.bidder.is_empty() {
                return Err(GenesisValidationError::InvalidBid {
                    auction_id: entry.auction_id,
                    reason: "bidder address is empty".into(),
                });
            }
            if entry.bid.bidder == auction.seller {
                return Err(GenesisValidationError::InvalidBid {
                    auction_id: entry.auction_id,
                    reason: "bidder is the auction seller".into(),
                });
            }
            if entry.bid.amount.denom != auction.denom {
                return Err(GenesisValidationError::InvalidBid {
                    auction_id: entry.auction_id,
                    reason: "bid denomination does not match the auction".into(),
                });
            }
            if entry.bid.amount.amount <= auction.reserve_price {
                return Err(GenesisValidationError::InvalidBid {
                    auction_id: entry.auction_id,
                    reason: "bid does not exceed the reserve price".into(),
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during genesis validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenesisValidationError {
    #[error("invalid next auction id: {0}")]
    InvalidNextAuctionId(String),

    #[error("duplicate auction id {0}")]
    DuplicateAuction(u64),

    #[error("invalid auction {id}: {reason}")]
    InvalidAuction { id: u64, reason: String },

    #[error("bid references unknown auction {0}")]
    UnknownBidAuction(u64),

    #[error("invalid bid for auction {auction_id}: {reason}")]
    InvalidBid { auction_id: u64, reason: String },
}

/// Write a validated genesis configuration into the store.
pub fn init_genesis<S: KvStore>(
    state: &mut MarketplaceState<S>,
    genesis: &MarketplaceGenesis,
) -> Result<(), MarketplaceError> {
    genesis
        .validate()
        .map_err(|err| MarketplaceError::InvalidInput(err.to_string()))?;

    state.set_next_auction_id(genesis.next_auction_id)?;
    for auction in &genesis.auctions {
        state.set_auction(auction)?;
    }
    for entry in &genesis.bids {
        state.apply_bid(entry.auction_id, None, &entry.bid)?;
    }
    Ok(())
}
