//! Call message types for the marketplace module.

use bazaar_types::Coin;
use borsh::{BorshDeserialize, BorshSerialize};

/// Call messages for the marketplace module.
///
/// The sender of the enclosing transaction acts as the seller for
/// `CreateAuction` and as the bidder for `PlaceBid`.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub enum MarketplaceCall {
    /// Open a new auction with an active `[start_height, end_height)`
    /// window.
    CreateAuction {
        denom: String,
        reserve_price: u128,
        start_height: u64,
        end_height: u64,
    },

    /// Place a bid on an active auction.
    PlaceBid { auction_id: u64, amount: Coin },

    /// Settle an auction whose active window has elapsed.
    CloseAuction { auction_id: u64 },
}
