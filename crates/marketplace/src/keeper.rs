//! Auction ledger state transitions.
//!
//! The keeper owns every mutation of the ledger. It emits no events; the
//! message handlers append those after a transition succeeds, keeping the
//! ledger free of observability concerns.

use bazaar_runtime::store::KvStore;
use bazaar_types::{Address, Auction, AuctionStatus, Bid};

use crate::admission::{admit, AdmissionVerdict};
use crate::error::MarketplaceError;
use crate::state::MarketplaceState;

/// Open a new auction on behalf of `seller`.
pub fn create_auction<S: KvStore>(
    state: &mut MarketplaceState<S>,
    seller: &Address,
    denom: String,
    reserve_price: u128,
    start_height: u64,
    end_height: u64,
    now_height: u64,
) -> Result<Auction, MarketplaceError> {
    if seller.is_empty() {
        return Err(MarketplaceError::InvalidInput(
            "seller address is empty".to_string(),
        ));
    }
    if denom.is_empty() {
        return Err(MarketplaceError::InvalidInput(
            "sale denomination is empty".to_string(),
        ));
    }
    if start_height >= end_height {
        return Err(MarketplaceError::InvalidInput(format!(
            "start height {start_height} must precede end height {end_height}"
        )));
    }
    if end_height <= now_height {
        return Err(MarketplaceError::InvalidInput(format!(
            "end height {end_height} is not after current height {now_height}"
        )));
    }

    let id = state.allocate_auction_id()?;
    let auction = Auction {
        id,
        seller: seller.clone(),
        denom,
        reserve_price,
        start_height,
        end_height,
        status: AuctionStatus::Active,
    };
    state.set_auction(&auction)?;
    Ok(auction)
}

/// Apply a bid to the ledger.
///
/// Preconditions are checked fail-fast in admission order; the first
/// violation rejects the bid permanently and leaves the ledger untouched.
/// On success the stored current bid is replaced, the previous bidder's
/// escrow is refunded, and the new bidder's amount is held — all in one
/// state transition.
pub fn place_bid<S: KvStore>(
    state: &mut MarketplaceState<S>,
    auction_id: u64,
    bid: Bid,
    now_height: u64,
) -> Result<(), MarketplaceError> {
    if bid.bidder.is_empty() {
        return Err(MarketplaceError::InvalidInput(
            "bidder address is empty".to_string(),
        ));
    }
    if !bid.amount.is_valid() {
        return Err(MarketplaceError::InvalidInput(
            "bid denomination is empty".to_string(),
        ));
    }

    let auction = state.auction(auction_id)?;
    if let Some(auction) = &auction {
        if bid.amount.denom != auction.denom {
            return Err(MarketplaceError::InvalidInput(format!(
                "bid denomination {} does not match auction denomination {}",
                bid.amount.denom, auction.denom
            )));
        }
    }

    let current = state.current_bid(auction_id)?;
    match admit(auction.as_ref(), current.as_ref(), &bid, now_height) {
        AdmissionVerdict::Accept => {}
        AdmissionVerdict::RejectNotFound => return Err(MarketplaceError::NotFound(auction_id)),
        AdmissionVerdict::RejectClosed => return Err(MarketplaceError::AuctionClosed(auction_id)),
        AdmissionVerdict::RejectTooLow { minimum } => {
            return Err(MarketplaceError::BidTooLow {
                minimum,
                got: bid.amount.amount,
            })
        }
        AdmissionVerdict::RejectSelfBid => return Err(MarketplaceError::SelfBid),
    }

    state.apply_bid(auction_id, current.as_ref(), &bid)?;
    Ok(())
}

/// Settle an auction whose active window has elapsed.
///
/// With a standing bid the auction ends and the winner's escrow is
/// released as the settlement payout; without one it is cancelled. The
/// winning bid record is retained as the auction's result.
pub fn close_auction<S: KvStore>(
    state: &mut MarketplaceState<S>,
    auction_id: u64,
    now_height: u64,
) -> Result<(Auction, Option<Bid>), MarketplaceError> {
    let mut auction = state
        .auction(auction_id)?
        .ok_or(MarketplaceError::NotFound(auction_id))?;

    if auction.status != AuctionStatus::Active {
        return Err(MarketplaceError::AuctionClosed(auction_id));
    }
    if now_height < auction.end_height {
        return Err(MarketplaceError::AuctionLive(auction_id));
    }

    let winning = state.current_bid(auction_id)?;
    match &winning {
        Some(bid) => {
            auction.status = AuctionStatus::Ended;
            state.release_escrow(&bid.bidder, bid.amount.amount)?;
        }
        None => {
            auction.status = AuctionStatus::Cancelled;
        }
    }
    state.set_auction(&auction)?;
    Ok((auction, winning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_types::Coin;

    fn bid(bidder: &str, amount: u128) -> Bid {
        Bid::new(bidder, Coin::new("ubzr", amount))
    }

    fn state_with_auction() -> MarketplaceState<bazaar_runtime::MemStore> {
        let mut state = MarketplaceState::in_memory();
        create_auction(
            &mut state,
            &"alice".to_string(),
            "ubzr".to_string(),
            100,
            0,
            1000,
            0,
        )
        .unwrap();
        state
    }

    #[test]
    fn test_create_auction_assigns_ids() {
        let mut state = MarketplaceState::in_memory();
        let first = create_auction(
            &mut state,
            &"alice".to_string(),
            "ubzr".to_string(),
            100,
            0,
            1000,
            0,
        )
        .unwrap();
        let second = create_auction(
            &mut state,
            &"alice".to_string(),
            "ubzr".to_string(),
            50,
            10,
            500,
            0,
        )
        .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, AuctionStatus::Active);
    }

    #[test]
    fn test_create_auction_rejects_bad_window() {
        let mut state = MarketplaceState::in_memory();
        let result = create_auction(
            &mut state,
            &"alice".to_string(),
            "ubzr".to_string(),
            100,
            500,
            500,
            0,
        );
        assert!(matches!(result, Err(MarketplaceError::InvalidInput(_))));

        let result = create_auction(
            &mut state,
            &"alice".to_string(),
            "ubzr".to_string(),
            100,
            0,
            10,
            10,
        );
        assert!(matches!(result, Err(MarketplaceError::InvalidInput(_))));
    }

    #[test]
    fn test_increasing_bid_sequence_all_accepted() {
        let mut state = state_with_auction();
        for (i, amount) in [150u128, 151, 200, 350].iter().enumerate() {
            let bidder = format!("bidder-{i}");
            place_bid(&mut state, 1, bid(&bidder, *amount), 10).unwrap();
            let current = state.current_bid(1).unwrap().unwrap();
            assert_eq!(current.amount.amount, *amount);
            assert_eq!(current.bidder, bidder);
        }
    }

    #[test]
    fn test_low_bid_rejected_and_ledger_unchanged() {
        let mut state = state_with_auction();
        place_bid(&mut state, 1, bid("bob", 150), 10).unwrap();

        let result = place_bid(&mut state, 1, bid("carol", 120), 10);
        assert_eq!(
            result,
            Err(MarketplaceError::BidTooLow {
                minimum: 150,
                got: 120
            })
        );
        assert_eq!(state.current_bid(1).unwrap(), Some(bid("bob", 150)));
        assert_eq!(state.escrow("bob").unwrap(), 150);
        assert_eq!(state.escrow("carol").unwrap(), 0);
    }

    #[test]
    fn test_unknown_auction_rejected() {
        let mut state = state_with_auction();
        let result = place_bid(&mut state, 99, bid("bob", 150), 10);
        assert_eq!(result, Err(MarketplaceError::NotFound(99)));
        assert_eq!(state.current_bid(99).unwrap(), None);
    }

    #[test]
    fn test_bid_after_end_height_rejected() {
        let mut state = state_with_auction();
        let result = place_bid(&mut state, 1, bid("bob", 150), 1000);
        assert_eq!(result, Err(MarketplaceError::AuctionClosed(1)));
    }

    #[test]
    fn test_seller_self_bid_rejected() {
        let mut state = state_with_auction();
        let result = place_bid(&mut state, 1, bid("alice", 150), 10);
        assert_eq!(result, Err(MarketplaceError::SelfBid));
    }

    #[test]
    fn test_denom_mismatch_rejected() {
        let mut state = state_with_auction();
        let result = place_bid(&mut state, 1, Bid::new("bob", Coin::new("uatom", 150)), 10);
        assert!(matches!(result, Err(MarketplaceError::InvalidInput(_))));
        assert_eq!(state.current_bid(1).unwrap(), None);
    }

    #[test]
    fn test_empty_bidder_rejected() {
        let mut state = state_with_auction();
        let result = place_bid(&mut state, 1, bid("", 150), 10);
        assert!(matches!(result, Err(MarketplaceError::InvalidInput(_))));
    }

    #[test]
    fn test_outbid_releases_previous_escrow() {
        // Auction{id: 1, reserve: 100, seller: alice, end: 1000}.
        let mut state = state_with_auction();

        place_bid(&mut state, 1, bid("bob", 150), 10).unwrap();
        assert_eq!(state.current_bid(1).unwrap(), Some(bid("bob", 150)));

        let rejected = place_bid(&mut state, 1, bid("carol", 120), 10);
        assert!(matches!(rejected, Err(MarketplaceError::BidTooLow { .. })));
        assert_eq!(state.current_bid(1).unwrap(), Some(bid("bob", 150)));

        place_bid(&mut state, 1, bid("carol", 200), 10).unwrap();
        assert_eq!(state.current_bid(1).unwrap(), Some(bid("carol", 200)));
        assert_eq!(state.escrow("bob").unwrap(), 0);
        assert_eq!(state.escrow("carol").unwrap(), 200);
    }

    #[test]
    fn test_close_with_winner() {
        let mut state = state_with_auction();
        place_bid(&mut state, 1, bid("bob", 150), 10).unwrap();

        let (auction, winning) = close_auction(&mut state, 1, 1000).unwrap();
        assert_eq!(auction.status, AuctionStatus::Ended);
        assert_eq!(winning, Some(bid("bob", 150)));
        assert_eq!(state.escrow("bob").unwrap(), 0);
        // The winning record stays as the auction's result.
        assert_eq!(state.current_bid(1).unwrap(), Some(bid("bob", 150)));
    }

    #[test]
    fn test_close_without_bids_cancels() {
        let mut state = state_with_auction();
        let (auction, winning) = close_auction(&mut state, 1, 1000).unwrap();
        assert_eq!(auction.status, AuctionStatus::Cancelled);
        assert_eq!(winning, None);
    }

    #[test]
    fn test_close_before_end_rejected() {
        let mut state = state_with_auction();
        let result = close_auction(&mut state, 1, 999);
        assert_eq!(result, Err(MarketplaceError::AuctionLive(1)));
    }

    #[test]
    fn test_close_twice_rejected() {
        let mut state = state_with_auction();
        close_auction(&mut state, 1, 1000).unwrap();
        let result = close_auction(&mut state, 1, 1001);
        assert_eq!(result, Err(MarketplaceError::AuctionClosed(1)));
    }

    #[test]
    fn test_no_bids_accepted_after_close() {
        let mut state = state_with_auction();
        close_auction(&mut state, 1, 1000).unwrap();
        let result = place_bid(&mut state, 1, bid("bob", 150), 1001);
        assert_eq!(result, Err(MarketplaceError::AuctionClosed(1)));
    }
}
