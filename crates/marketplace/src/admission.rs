//! Bid admission rules.
//!
//! Admission is a pure function of the auction record, the current winning
//! bid, the proposed bid, and the block height, so the rules can be tested
//! without touching storage. The keeper delegates its precondition chain
//! here and maps the verdict onto module errors.

use bazaar_types::{Auction, Bid};

/// Outcome of evaluating a proposed bid against the ledger invariants.
///
/// Checks are ordered and fail fast; the first violated rule wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmissionVerdict {
    Accept,
    /// The referenced auction does not exist.
    RejectNotFound,
    /// The auction is not Active or the height is outside its window.
    RejectClosed,
    /// The proposed amount does not strictly exceed the threshold.
    RejectTooLow {
        /// The amount the proposal had to exceed: the current winning bid,
        /// or the reserve price when no bid stands.
        minimum: u128,
    },
    /// The bidder is the auction's seller.
    RejectSelfBid,
}

/// Evaluate a proposed bid.
pub fn admit(
    auction: Option<&Auction>,
    current: Option<&Bid>,
    proposed: &Bid,
    now_height: u64,
) -> AdmissionVerdict {
    let auction = match auction {
        Some(auction) => auction,
        None => return AdmissionVerdict::RejectNotFound,
    };

    if !auction.is_live(now_height) {
        return AdmissionVerdict::RejectClosed;
    }

    let minimum = current
        .map(|bid| bid.amount.amount)
        .unwrap_or(auction.reserve_price);
    if proposed.amount.amount <= minimum {
        return AdmissionVerdict::RejectTooLow { minimum };
    }

    if proposed.bidder == auction.seller {
        return AdmissionVerdict::RejectSelfBid;
    }

    AdmissionVerdict::Accept
}
