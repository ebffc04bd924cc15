//! Store-backed ledger state for the marketplace module.
//!
//! Key layout:
//!
//! - `0x01 | id (BE u64)` -> `Auction`
//! - `0x02`               -> next auction id (`u64`)
//! - `0x03 | id (BE u64)` -> current winning `Bid`
//! - `0x04 | bidder`      -> escrowed total (`u128`)

use bazaar_runtime::store::{self, KvStore, StoreError};
use bazaar_runtime::{paginate_prefix, MemStore};
use bazaar_types::{Auction, Bid, PageRequest, PageResponse};

const AUCTION_KEY_PREFIX: [u8; 1] = [0x01];
const NEXT_AUCTION_ID_KEY: [u8; 1] = [0x02];
const BID_KEY_PREFIX: [u8; 1] = [0x03];
const ESCROW_KEY_PREFIX: [u8; 1] = [0x04];

fn auction_key(auction_id: u64) -> Vec<u8> {
    let mut key = AUCTION_KEY_PREFIX.to_vec();
    key.extend_from_slice(&auction_id.to_be_bytes());
    key
}

fn bid_key(auction_id: u64) -> Vec<u8> {
    let mut key = BID_KEY_PREFIX.to_vec();
    key.extend_from_slice(&auction_id.to_be_bytes());
    key
}

fn escrow_key(address: &str) -> Vec<u8> {
    let mut key = ESCROW_KEY_PREFIX.to_vec();
    key.extend_from_slice(address.as_bytes());
    key
}

/// The marketplace module's view of its store.
///
/// This type exclusively owns all auction, current-bid, and escrow records;
/// no other component mutates them.
#[derive(Debug)]
pub struct MarketplaceState<S: KvStore> {
    store: S,
}

impl MarketplaceState<MemStore> {
    pub fn in_memory() -> Self {
        Self::new(MemStore::new())
    }
}

impl<S: KvStore> MarketplaceState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Next auction id to assign; ids start at 1.
    pub fn next_auction_id(&self) -> Result<u64, StoreError> {
        let stored: Option<u64> = store::get_value(&self.store, &NEXT_AUCTION_ID_KEY)?;
        Ok(stored.unwrap_or(1))
    }

    pub fn set_next_auction_id(&mut self, next: u64) -> Result<(), StoreError> {
        store::set_value(&mut self.store, NEXT_AUCTION_ID_KEY.to_vec(), &next)
    }

    /// Get the next auction id and advance the counter.
    pub fn allocate_auction_id(&mut self) -> Result<u64, StoreError> {
        let id = self.next_auction_id()?;
        self.set_next_auction_id(id + 1)?;
        Ok(id)
    }

    pub fn auction(&self, auction_id: u64) -> Result<Option<Auction>, StoreError> {
        store::get_value(&self.store, &auction_key(auction_id))
    }

    pub fn set_auction(&mut self, auction: &Auction) -> Result<(), StoreError> {
        store::set_value(&mut self.store, auction_key(auction.id), auction)
    }

    /// List auctions in id order.
    pub fn auctions(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<Auction>, PageResponse), StoreError> {
        paginate_prefix(&self.store, &AUCTION_KEY_PREFIX, request, |key, value| {
            store::decode(key, value)
        })
    }

    /// Current winning bid for an auction, if any.
    pub fn current_bid(&self, auction_id: u64) -> Result<Option<Bid>, StoreError> {
        store::get_value(&self.store, &bid_key(auction_id))
    }

    /// Total amount held in escrow for an address.
    pub fn escrow(&self, address: &str) -> Result<u128, StoreError> {
        let held: Option<u128> = store::get_value(&self.store, &escrow_key(address))?;
        Ok(held.unwrap_or(0))
    }

    /// Hold an amount in escrow for an address.
    pub fn hold_escrow(&mut self, address: &str, amount: u128) -> Result<(), StoreError> {
        let held = self.escrow(address)?;
        store::set_value(
            &mut self.store,
            escrow_key(address),
            &held.saturating_add(amount),
        )
    }

    /// Release a held amount; the entry disappears when nothing remains.
    pub fn release_escrow(&mut self, address: &str, amount: u128) -> Result<(), StoreError> {
        let remaining = self.escrow(address)?.saturating_sub(amount);
        if remaining == 0 {
            self.store.delete(&escrow_key(address));
        } else {
            store::set_value(&mut self.store, escrow_key(address), &remaining)?;
        }
        Ok(())
    }

    /// Replace the current winning bid, refunding the previous bidder's
    /// escrow and holding the new bidder's amount in one state transition.
    ///
    /// Every value is encoded before the first write, so a codec failure
    /// leaves the ledger in its prior state; the writes themselves cannot
    /// fail.
    pub fn apply_bid(
        &mut self,
        auction_id: u64,
        previous: Option<&Bid>,
        accepted: &Bid,
    ) -> Result<(), StoreError> {
        let bid_bytes = store::encode(accepted)?;

        // Refund before hold; when the previous winner raises their own
        // bid both adjustments land on the same balance.
        let mut refund: Option<(Vec<u8>, u128)> = None;
        let mut hold_base = self.escrow(&accepted.bidder)?;
        if let Some(prev) = previous {
            let remaining = self.escrow(&prev.bidder)?.saturating_sub(prev.amount.amount);
            if prev.bidder == accepted.bidder {
                hold_base = remaining;
            } else {
                refund = Some((escrow_key(&prev.bidder), remaining));
            }
        }
        let hold_bytes = store::encode(&hold_base.saturating_add(accepted.amount.amount))?;
        let refund_bytes = match &refund {
            Some((_, 0)) => None,
            Some((_, remaining)) => Some(store::encode(remaining)?),
            None => None,
        };

        if let Some((key, _)) = refund {
            match refund_bytes {
                Some(bytes) => self.store.set(key, bytes),
                None => self.store.delete(&key),
            }
        }
        self.store.set(escrow_key(&accepted.bidder), hold_bytes);
        self.store.set(bid_key(auction_id), bid_bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_types::{AuctionStatus, Coin};

    fn auction(id: u64) -> Auction {
        Auction {
            id,
            seller: "alice".to_string(),
            denom: "ubzr".to_string(),
            reserve_price: 100,
            start_height: 0,
            end_height: 1000,
            status: AuctionStatus::Active,
        }
    }

    fn bid(bidder: &str, amount: u128) -> Bid {
        Bid::new(bidder, Coin::new("ubzr", amount))
    }

    #[test]
    fn test_allocate_auction_id() {
        let mut state = MarketplaceState::in_memory();
        assert_eq!(state.allocate_auction_id().unwrap(), 1);
        assert_eq!(state.allocate_auction_id().unwrap(), 2);
        assert_eq!(state.allocate_auction_id().unwrap(), 3);
    }

    #[test]
    fn test_auction_roundtrip() {
        let mut state = MarketplaceState::in_memory();
        assert_eq!(state.auction(1).unwrap(), None);

        state.set_auction(&auction(1)).unwrap();
        assert_eq!(state.auction(1).unwrap(), Some(auction(1)));
    }

    #[test]
    fn test_escrow_operations() {
        let mut state = MarketplaceState::in_memory();
        assert_eq!(state.escrow("bob").unwrap(), 0);

        state.hold_escrow("bob", 100).unwrap();
        assert_eq!(state.escrow("bob").unwrap(), 100);

        state.hold_escrow("bob", 50).unwrap();
        assert_eq!(state.escrow("bob").unwrap(), 150);

        state.release_escrow("bob", 75).unwrap();
        assert_eq!(state.escrow("bob").unwrap(), 75);

        state.release_escrow("bob", 75).unwrap();
        assert_eq!(state.escrow("bob").unwrap(), 0);
    }

    #[test]
    fn test_apply_bid_refunds_previous_bidder() {
        let mut state = MarketplaceState::in_memory();
        let first = bid("bob", 150);
        state.apply_bid(1, None, &first).unwrap();
        assert_eq!(state.current_bid(1).unwrap(), Some(first.clone()));
        assert_eq!(state.escrow("bob").unwrap(), 150);

        let second = bid("carol", 200);
        state.apply_bid(1, Some(&first), &second).unwrap();
        assert_eq!(state.current_bid(1).unwrap(), Some(second));
        assert_eq!(state.escrow("bob").unwrap(), 0);
        assert_eq!(state.escrow("carol").unwrap(), 200);
    }

    #[test]
    fn test_apply_bid_same_bidder_raises_own_bid() {
        let mut state = MarketplaceState::in_memory();
        let first = bid("bob", 150);
        state.apply_bid(1, None, &first).unwrap();

        let raised = bid("bob", 300);
        state.apply_bid(1, Some(&first), &raised).unwrap();
        assert_eq!(state.current_bid(1).unwrap(), Some(raised));
        assert_eq!(state.escrow("bob").unwrap(), 300);
    }

    #[test]
    fn test_auctions_listing_in_id_order() {
        let mut state = MarketplaceState::in_memory();
        for id in [3u64, 1, 2] {
            state.set_auction(&auction(id)).unwrap();
        }

        let (items, page) = state.auctions(&PageRequest::by_offset(0, 10)).unwrap();
        let ids: Vec<u64> = items.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(page.next_key, None);
    }
}
