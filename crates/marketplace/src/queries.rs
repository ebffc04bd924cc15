//! Query handlers for the marketplace module.

use bazaar_runtime::store::KvStore;
use bazaar_types::{Address, Auction, Bid, PageRequest, PageResponse};
use serde::{Deserialize, Serialize};

use crate::error::MarketplaceError;
use crate::state::MarketplaceState;

/// Query request types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MarketplaceQuery {
    /// Get auction details by id.
    GetAuction { auction_id: u64 },

    /// List auctions in id order.
    ListAuctions { pagination: PageRequest },

    /// Get the current winning bid for an auction.
    GetBid { auction_id: u64 },

    /// Get the total amount held in escrow for an address.
    GetEscrow { address: Address },
}

/// Query response types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MarketplaceQueryResponse {
    Auction(Option<Auction>),

    Auctions {
        auctions: Vec<Auction>,
        pagination: PageResponse,
    },

    Bid(Option<Bid>),

    Escrow(u128),
}

/// Handle a query.
pub fn handle_query<S: KvStore>(
    state: &MarketplaceState<S>,
    query: MarketplaceQuery,
) -> Result<MarketplaceQueryResponse, MarketplaceError> {
    match query {
        MarketplaceQuery::GetAuction { auction_id } => {
            Ok(MarketplaceQueryResponse::Auction(state.auction(auction_id)?))
        }

        MarketplaceQuery::ListAuctions { pagination } => {
            let (auctions, pagination) = state.auctions(&pagination)?;
            Ok(MarketplaceQueryResponse::Auctions {
                auctions,
                pagination,
            })
        }

        MarketplaceQuery::GetBid { auction_id } => {
            Ok(MarketplaceQueryResponse::Bid(state.current_bid(auction_id)?))
        }

        MarketplaceQuery::GetEscrow { address } => {
            Ok(MarketplaceQueryResponse::Escrow(state.escrow(&address)?))
        }
    }
}
