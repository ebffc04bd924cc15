//! Message handlers for the marketplace module.
//!
//! Handlers are stateless adapters: they take the explicitly passed
//! transaction context, invoke the keeper, and forward any error verbatim
//! so the surrounding framework can abort the transaction. Events are
//! appended only after the keeper has succeeded.

use bazaar_runtime::store::KvStore;
use bazaar_runtime::TxContext;
use bazaar_types::{Bid, Coin};

use crate::error::MarketplaceError;
use crate::events;
use crate::keeper;
use crate::state::MarketplaceState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<T, MarketplaceError>;

/// Handle a `CreateAuction` call; the sender becomes the seller.
pub fn handle_create_auction<S: KvStore>(
    state: &mut MarketplaceState<S>,
    ctx: &mut TxContext,
    denom: String,
    reserve_price: u128,
    start_height: u64,
    end_height: u64,
) -> HandlerResult<u64> {
    let auction = keeper::create_auction(
        state,
        &ctx.sender,
        denom,
        reserve_price,
        start_height,
        end_height,
        ctx.height,
    )?;

    ctx.events.emit_all(events::create_auction_events(&auction));
    Ok(auction.id)
}

/// Handle a `PlaceBid` call; the sender is the bidder.
pub fn handle_place_bid<S: KvStore>(
    state: &mut MarketplaceState<S>,
    ctx: &mut TxContext,
    auction_id: u64,
    amount: Coin,
) -> HandlerResult<()> {
    let bid = Bid::new(ctx.sender.clone(), amount);
    keeper::place_bid(state, auction_id, bid.clone(), ctx.height)?;

    ctx.events.emit_all(events::bid_placed_events(auction_id, &bid));
    Ok(())
}

/// Handle a `CloseAuction` call.
pub fn handle_close_auction<S: KvStore>(
    state: &mut MarketplaceState<S>,
    ctx: &mut TxContext,
    auction_id: u64,
) -> HandlerResult<()> {
    let (auction, winning) = keeper::close_auction(state, auction_id, ctx.height)?;

    ctx.events.emit_all(events::auction_closed_events(
        &auction,
        winning.as_ref(),
        &ctx.sender,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EVENT_TYPE_BID_PLACED, EVENT_TYPE_CREATE_AUCTION};
    use bazaar_runtime::{MemStore, EVENT_TYPE_MESSAGE};

    fn setup() -> (MarketplaceState<MemStore>, TxContext) {
        let mut state = MarketplaceState::in_memory();
        let mut ctx = TxContext::new("alice", 0);
        handle_create_auction(&mut state, &mut ctx, "ubzr".to_string(), 100, 0, 1000).unwrap();
        (state, TxContext::new("bob", 10))
    }

    #[test]
    fn test_create_auction_emits_event_pair() {
        let mut state = MarketplaceState::in_memory();
        let mut ctx = TxContext::new("alice", 0);
        let id =
            handle_create_auction(&mut state, &mut ctx, "ubzr".to_string(), 100, 0, 1000).unwrap();
        assert_eq!(id, 1);

        let kinds: Vec<&str> = ctx.events.events().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec![EVENT_TYPE_CREATE_AUCTION, EVENT_TYPE_MESSAGE]);
    }

    #[test]
    fn test_place_bid_emits_domain_event_before_message() {
        let (mut state, mut ctx) = setup();
        handle_place_bid(&mut state, &mut ctx, 1, Coin::new("ubzr", 150)).unwrap();

        let events = ctx.events.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EVENT_TYPE_BID_PLACED);
        assert_eq!(events[1].kind, EVENT_TYPE_MESSAGE);
        assert_eq!(events[1].attributes[1].value, "bob");
    }

    #[test]
    fn test_rejected_bid_forwards_error_and_emits_nothing() {
        let (mut state, mut ctx) = setup();
        let result = handle_place_bid(&mut state, &mut ctx, 99, Coin::new("ubzr", 150));
        assert_eq!(result, Err(MarketplaceError::NotFound(99)));
        assert!(ctx.events.events().is_empty());
    }

    #[test]
    fn test_close_auction_emits_winner() {
        let (mut state, mut ctx) = setup();
        handle_place_bid(&mut state, &mut ctx, 1, Coin::new("ubzr", 150)).unwrap();

        let mut close_ctx = TxContext::new("alice", 1000);
        handle_close_auction(&mut state, &mut close_ctx, 1).unwrap();

        let closed = &close_ctx.events.events()[0];
        assert_eq!(closed.kind, crate::events::EVENT_TYPE_AUCTION_CLOSED);
        let winner = closed
            .attributes
            .iter()
            .find(|a| a.key == crate::events::ATTRIBUTE_KEY_WINNER)
            .unwrap();
        assert_eq!(winner.value, "bob");
    }
}
