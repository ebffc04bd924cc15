//! RPC-compatible types for the mock chain.

use bazaar_runtime::Event;
use bazaar_types::{AddressRecord, Auction, PageResponse};
use serde::{Deserialize, Serialize};

/// Block info response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInfo {
    pub height: u64,
}

/// Result of a successfully executed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxResult {
    /// Id assigned by `tx_createAuction`; absent for other calls.
    pub auction_id: Option<u64>,
    /// Events emitted while executing the call, in emission order.
    pub events: Vec<Event>,
}

/// Parameters for creating an auction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuctionParams {
    pub sender: String,
    pub denom: String,
    pub reserve_price: u128,
    pub start_height: u64,
    pub end_height: u64,
}

/// Parameters for placing a bid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceBidParams {
    pub sender: String,
    pub auction_id: u64,
    pub amount: u128,
    pub denom: String,
}

/// Parameters for closing an auction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseAuctionParams {
    pub sender: String,
    pub auction_id: u64,
}

/// Parameters for creating or updating an addressbook record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressParams {
    pub sender: String,
    pub network: String,
    pub label: String,
    pub value: String,
}

/// Parameters for deleting an addressbook record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAddressParams {
    pub sender: String,
    pub network: String,
    pub label: String,
}

/// One page of auctions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionPage {
    pub auctions: Vec<Auction>,
    pub pagination: PageResponse,
}

/// One page of addressbook records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressPage {
    pub addresses: Vec<AddressRecord>,
    pub pagination: PageResponse,
}
