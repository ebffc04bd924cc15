//! Application wiring for the bazaar chain modules.
//!
//! `App` holds one store per module and routes validated messages to the
//! module handlers through a tagged-variant dispatch: the `Msg` enum wraps
//! each module's call type, and `dispatch` delivers it with the explicitly
//! passed transaction context. A failed call performs no observable
//! mutation — every module handler issues its writes only after all checks
//! have passed — so the router simply forwards errors to the caller.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bazaar_addressbook::{
    genesis as addressbook_genesis, handlers as addressbook_handlers, AddressbookCall,
    AddressbookError, AddressbookGenesis, AddressbookState,
};
use bazaar_marketplace::{
    genesis as marketplace_genesis, handlers as marketplace_handlers, MarketplaceCall,
    MarketplaceError, MarketplaceGenesis, MarketplaceState,
};
use bazaar_runtime::{MemStore, TxContext};

/// A validated message routed to one of the application modules.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub enum Msg {
    Marketplace(MarketplaceCall),
    Addressbook(AddressbookCall),
}

/// Response returned by a successfully dispatched message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MsgResponse {
    /// Empty success marker.
    Empty,
    /// Id assigned to a newly created auction.
    AuctionCreated { auction_id: u64 },
}

/// Errors surfaced by message dispatch, unchanged from the owning module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Marketplace(#[from] MarketplaceError),

    #[error(transparent)]
    Addressbook(#[from] AddressbookError),
}

/// Genesis configuration for the whole application.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppGenesis {
    pub marketplace: MarketplaceGenesis,
    pub addressbook: AddressbookGenesis,
}

/// Application state: one store per module.
pub struct App {
    pub marketplace: MarketplaceState<MemStore>,
    pub addressbook: AddressbookState<MemStore>,
}

impl App {
    pub fn new() -> Self {
        Self {
            marketplace: MarketplaceState::in_memory(),
            addressbook: AddressbookState::in_memory(),
        }
    }

    /// Seed both modules from a validated genesis configuration.
    pub fn init_genesis(&mut self, genesis: &AppGenesis) -> Result<(), AppError> {
        marketplace_genesis::init_genesis(&mut self.marketplace, &genesis.marketplace)?;
        addressbook_genesis::init_genesis(&mut self.addressbook, &genesis.addressbook)?;
        Ok(())
    }

    /// Route a message to its module handler.
    pub fn dispatch(&mut self, ctx: &mut TxContext, msg: Msg) -> Result<MsgResponse, AppError> {
        match msg {
            Msg::Marketplace(call) => match call {
                MarketplaceCall::CreateAuction {
                    denom,
                    reserve_price,
                    start_height,
                    end_height,
                } => {
                    let auction_id = marketplace_handlers::handle_create_auction(
                        &mut self.marketplace,
                        ctx,
                        denom,
                        reserve_price,
                        start_height,
                        end_height,
                    )?;
                    Ok(MsgResponse::AuctionCreated { auction_id })
                }
                MarketplaceCall::PlaceBid { auction_id, amount } => {
                    marketplace_handlers::handle_place_bid(
                        &mut self.marketplace,
                        ctx,
                        auction_id,
                        amount,
                    )?;
                    Ok(MsgResponse::Empty)
                }
                MarketplaceCall::CloseAuction { auction_id } => {
                    marketplace_handlers::handle_close_auction(
                        &mut self.marketplace,
                        ctx,
                        auction_id,
                    )?;
                    Ok(MsgResponse::Empty)
                }
            },

            Msg::Addressbook(call) => match call {
                AddressbookCall::CreateAddress {
                    network,
                    label,
                    value,
                } => {
                    addressbook_handlers::handle_create_address(
                        &mut self.addressbook,
                        ctx,
                        network,
                        label,
                        value,
                    )?;
                    Ok(MsgResponse::Empty)
                }
                AddressbookCall::UpdateAddress {
                    network,
                    label,
                    value,
                } => {
                    addressbook_handlers::handle_update_address(
                        &mut self.addressbook,
                        ctx,
                        network,
                        label,
                        value,
                    )?;
                    Ok(MsgResponse::Empty)
                }
                AddressbookCall::DeleteAddress { network, label } => {
                    addressbook_handlers::handle_delete_address(
                        &mut self.addressbook,
                        ctx,
                        network,
                        label,
                    )?;
                    Ok(MsgResponse::Empty)
                }
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
