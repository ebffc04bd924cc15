//! Core type definitions for the bazaar chain modules.
//!
//! This crate provides the shared data structures used by the marketplace
//! and addressbook modules: account addresses, coin amounts, auction and
//! bid records, addressbook records, and the generic pagination contract.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};

// =========================
// ADDRESSES
// =========================

/// Bech32-style account identifier, carried as an opaque string.
pub type Address = String;

// =========================
// COINS
// =========================

/// A token amount in a single denomination.
#[derive(
    Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// A coin is well formed when its denomination is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.denom.is_empty()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// =========================
// MARKETPLACE TYPES
// =========================

/// Auction lifecycle status.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub enum AuctionStatus {
    /// Accepting bids within the `[start_height, end_height)` window.
    Active,
    /// Settled with a winning bid.
    Ended,
    /// Closed without any bid.
    Cancelled,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuctionStatus::Active => "active",
            AuctionStatus::Ended => "ended",
            AuctionStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A sellable item under bidding with a defined active window.
#[derive(
    Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    /// Denomination every bid on this auction must be priced in.
    pub denom: String,
    /// The first accepted bid must strictly exceed this price.
    pub reserve_price: u128,
    pub start_height: u64,
    pub end_height: u64,
    pub status: AuctionStatus,
}

impl Auction {
    /// Whether the auction accepts bids at the given block height.
    pub fn is_live(&self, height: u64) -> bool {
        self.status == AuctionStatus::Active
            && height >= self.start_height
            && height < self.end_height
    }
}

/// An offer of an amount by a bidder against an auction.
///
/// Only the current winning bid per auction is ever persisted.
#[derive(
    Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Bid {
    pub bidder: Address,
    pub amount: Coin,
}

impl Bid {
    pub fn new(bidder: impl Into<Address>, amount: Coin) -> Self {
        Self {
            bidder: bidder.into(),
            amount,
        }
    }
}

// =========================
// ADDRESSBOOK TYPES
// =========================

/// A registered remote address, keyed by `(creator, network, label)`.
#[derive(
    Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct AddressRecord {
    pub creator: Address,
    /// Network the registered value belongs to, e.g. "BTC".
    pub network: String,
    pub label: String,
    /// The registered remote address.
    pub value: String,
}
