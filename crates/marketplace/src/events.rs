//! Event shapes emitted by the marketplace handlers.
//!
//! Each accepted call produces an ordered pair of records: the domain
//! event first, then the generic `message` event. Downstream indexers
//! attribute the `message` event to the domain event that precedes it, so
//! the order is part of the contract.

use bazaar_runtime::{message_event, Event};
use bazaar_types::{Auction, Bid};

pub const MODULE_NAME: &str = "marketplace";

pub const EVENT_TYPE_CREATE_AUCTION: &str = "create_auction";
pub const EVENT_TYPE_BID_PLACED: &str = "bid_placed";
pub const EVENT_TYPE_AUCTION_CLOSED: &str = "auction_closed";

pub const ATTRIBUTE_KEY_AUCTION_ID: &str = "auction_id";
pub const ATTRIBUTE_KEY_SELLER: &str = "seller";
pub const ATTRIBUTE_KEY_DENOM: &str = "denom";
pub const ATTRIBUTE_KEY_PRICE: &str = "price";
pub const ATTRIBUTE_KEY_BIDDER: &str = "bidder";
pub const ATTRIBUTE_KEY_STATUS: &str = "status";
pub const ATTRIBUTE_KEY_WINNER: &str = "winner";

/// Events for an accepted `CreateAuction`.
pub fn create_auction_events(auction: &Auction) -> [Event; 2] {
    [
        Event::new(EVENT_TYPE_CREATE_AUCTION)
            .attribute(ATTRIBUTE_KEY_AUCTION_ID, auction.id.to_string())
            .attribute(ATTRIBUTE_KEY_SELLER, &auction.seller)
            .attribute(ATTRIBUTE_KEY_DENOM, &auction.denom),
        message_event(MODULE_NAME, &auction.seller),
    ]
}

/// Events for an accepted `PlaceBid`.
pub fn bid_placed_events(auction_id: u64, bid: &Bid) -> [Event; 2] {
    [
        Event::new(EVENT_TYPE_BID_PLACED)
            .attribute(ATTRIBUTE_KEY_AUCTION_ID, auction_id.to_string())
            .attribute(ATTRIBUTE_KEY_PRICE, bid.amount.to_string())
            .attribute(ATTRIBUTE_KEY_BIDDER, &bid.bidder),
        message_event(MODULE_NAME, &bid.bidder),
    ]
}

/// Events for an accepted `CloseAuction`.
pub fn auction_closed_events(auction: &Auction, winning: Option<&Bid>, sender: &str) -> [Event; 2] {
    let mut closed = Event::new(EVENT_TYPE_AUCTION_CLOSED)
        .attribute(ATTRIBUTE_KEY_AUCTION_ID, auction.id.to_string())
        .attribute(ATTRIBUTE_KEY_STATUS, auction.status.to_string());
    if let Some(bid) = winning {
        closed = closed
            .attribute(ATTRIBUTE_KEY_WINNER, &bid.bidder)
            .attribute(ATTRIBUTE_KEY_PRICE, bid.amount.to_string());
    }
    [closed, message_event(MODULE_NAME, sender)]
}
