//! Mock chain server for local testing of the bazaar modules.
//!
//! This provides a JSON-RPC server that simulates block production over
//! the application without requiring a real blockchain: transactions are
//! dispatched through the app router against an in-memory store, and an
//! admin endpoint advances the block height.

use anyhow::Result;
use jsonrpsee::core::async_trait;
use jsonrpsee::proc_macros::rpc;
use jsonrpsee::server::Server;
use jsonrpsee::types::ErrorObjectOwned;
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use bazaar_addressbook::AddressbookCall;
use bazaar_app::{App, AppGenesis, Msg, MsgResponse};
use bazaar_marketplace::MarketplaceCall;
use bazaar_runtime::TxContext;
use bazaar_types::{AddressRecord, Auction, Bid, Coin, PageRequest};

mod types;
use types::*;

/// Shared chain state.
struct ChainState {
    /// Application state
    app: App,
    /// Current block height (simulated)
    height: u64,
}

impl ChainState {
    fn new() -> Self {
        Self {
            app: App::new(),
            height: 0,
        }
    }

    fn advance_block(&mut self) {
        self.height += 1;
    }
}

/// RPC API definition for the mock chain.
#[rpc(server)]
pub trait MockChainApi {
    // ============ Admin Methods ============

    /// Initialize the chain with genesis config.
    #[method(name = "admin_init")]
    async fn admin_init(&self, genesis: AppGenesis) -> Result<bool, ErrorObjectOwned>;

    /// Advance the chain by one block.
    #[method(name = "admin_advanceBlock")]
    async fn admin_advance_block(&self) -> Result<BlockInfo, ErrorObjectOwned>;

    // ============ Transaction Methods ============

    /// Create a new auction.
    #[method(name = "tx_createAuction")]
    async fn tx_create_auction(
        &self,
        params: CreateAuctionParams,
    ) -> Result<TxResult, ErrorObjectOwned>;

    /// Place a bid on an auction.
    #[method(name = "tx_placeBid")]
    async fn tx_place_bid(&self, params: PlaceBidParams) -> Result<TxResult, ErrorObjectOwned>;

    /// Close an auction whose window has elapsed.
    #[method(name = "tx_closeAuction")]
    async fn tx_close_auction(
        &self,
        params: CloseAuctionParams,
    ) -> Result<TxResult, ErrorObjectOwned>;

    /// Register an addressbook record.
    #[method(name = "tx_createAddress")]
    async fn tx_create_address(&self, params: AddressParams) -> Result<TxResult, ErrorObjectOwned>;

    /// Update an addressbook record.
    #[method(name = "tx_updateAddress")]
    async fn tx_update_address(&self, params: AddressParams) -> Result<TxResult, ErrorObjectOwned>;

    /// Delete an addressbook record.
    #[method(name = "tx_deleteAddress")]
    async fn tx_delete_address(
        &self,
        params: DeleteAddressParams,
    ) -> Result<TxResult, ErrorObjectOwned>;

    // ============ Query Methods ============

    /// Get current block info.
    #[method(name = "chain_getBlockInfo")]
    async fn chain_get_block_info(&self) -> Result<BlockInfo, ErrorObjectOwned>;

    /// Get auction by id.
    #[method(name = "query_getAuction")]
    async fn query_get_auction(
        &self,
        auction_id: u64,
    ) -> Result<Option<Auction>, ErrorObjectOwned>;

    /// List auctions.
    #[method(name = "query_listAuctions")]
    async fn query_list_auctions(
        &self,
        pagination: PageRequest,
    ) -> Result<AuctionPage, ErrorObjectOwned>;

    /// Get the current winning bid for an auction.
    #[method(name = "query_getBid")]
    async fn query_get_bid(&self, auction_id: u64) -> Result<Option<Bid>, ErrorObjectOwned>;

    /// Get the escrowed total for an address.
    #[method(name = "query_getEscrow")]
    async fn query_get_escrow(&self, address: String) -> Result<u128, ErrorObjectOwned>;

    /// Look up an addressbook record by its composite key.
    #[method(name = "query_getAddress")]
    async fn query_get_address(
        &self,
        creator: String,
        network: String,
        label: String,
    ) -> Result<AddressRecord, ErrorObjectOwned>;

    /// List addressbook records.
    #[method(name = "query_listAddresses")]
    async fn query_list_addresses(
        &self,
        pagination: PageRequest,
    ) -> Result<AddressPage, ErrorObjectOwned>;
}

/// Implementation of the mock chain RPC server.
struct MockChainServer {
    state: Arc<RwLock<ChainState>>,
}

impl MockChainServer {
    fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ChainState::new())),
        }
    }

    fn rpc_error(msg: &str) -> ErrorObjectOwned {
        ErrorObjectOwned::owned(-32000, msg.to_string(), None::<()>)
    }

    /// Dispatch a message at the current height and collect its events.
    fn execute(&self, sender: &str, msg: Msg) -> Result<TxResult, ErrorObjectOwned> {
        let mut state = self.state.write();
        let height = state.height;
        let mut ctx = TxContext::new(sender, height);

        let response = state
            .app
            .dispatch(&mut ctx, msg)
            .map_err(|err| Self::rpc_error(&err.to_string()))?;

        Ok(TxResult {
            auction_id: match response {
                MsgResponse::AuctionCreated { auction_id } => Some(auction_id),
                MsgResponse::Empty => None,
            },
            events: ctx.events.into_events(),
        })
    }
}

#[async_trait]
impl MockChainApiServer for MockChainServer {
    async fn admin_init(&self, genesis: AppGenesis) -> Result<bool, ErrorObjectOwned> {
        let mut state = self.state.write();
        state
            .app
            .init_genesis(&genesis)
            .map_err(|err| Self::rpc_error(&format!("failed to init genesis: {err}")))?;

        info!("Chain initialized");
        Ok(true)
    }

    async fn admin_advance_block(&self) -> Result<BlockInfo, ErrorObjectOwned> {
        let mut state = self.state.write();
        state.advance_block();
        Ok(BlockInfo {
            height: state.height,
        })
    }

    async fn tx_create_auction(
        &self,
        params: CreateAuctionParams,
    ) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Marketplace(MarketplaceCall::CreateAuction {
            denom: params.denom,
            reserve_price: params.reserve_price,
            start_height: params.start_height,
            end_height: params.end_height,
        });
        let result = self.execute(&params.sender, msg)?;

        info!("Created auction {:?}", result.auction_id);
        Ok(result)
    }

    async fn tx_place_bid(&self, params: PlaceBidParams) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Marketplace(MarketplaceCall::PlaceBid {
            auction_id: params.auction_id,
            amount: Coin::new(params.denom, params.amount),
        });
        let result = self.execute(&params.sender, msg)?;

        info!(
            "Bid placed on auction {} by {}",
            params.auction_id, params.sender
        );
        Ok(result)
    }

    async fn tx_close_auction(
        &self,
        params: CloseAuctionParams,
    ) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Marketplace(MarketplaceCall::CloseAuction {
            auction_id: params.auction_id,
        });
        let result = self.execute(&params.sender, msg)?;

        info!("Closed auction {}", params.auction_id);
        Ok(result)
    }

    async fn tx_create_address(&self, params: AddressParams) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Addressbook(AddressbookCall::CreateAddress {
            network: params.network,
            label: params.label,
            value: params.value,
        });
        let result = self.execute(&params.sender, msg)?;
        Ok(result)
    }

    async fn tx_update_address(&self, params: AddressParams) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Addressbook(AddressbookCall::UpdateAddress {
            network: params.network,
            label: params.label,
            value: params.value,
        });
        let result = self.execute(&params.sender, msg)?;
        Ok(result)
    }

    async fn tx_delete_address(
        &self,
        params: DeleteAddressParams,
    ) -> Result<TxResult, ErrorObjectOwned> {
        let msg = Msg::Addressbook(AddressbookCall::DeleteAddress {
            network: params.network,
            label: params.label,
        });
        let result = self.execute(&params.sender, msg)?;
        Ok(result)
    }

    async fn chain_get_block_info(&self) -> Result<BlockInfo, ErrorObjectOwned> {
        let state = self.state.read();
        Ok(BlockInfo {
            height: state.height,
        })
    }

    async fn query_get_auction(
        &self,
        auction_id: u64,
    ) -> Result<Option<Auction>, ErrorObjectOwned> {
        let state = self.state.read();
        state
            .app
            .marketplace
            .auction(auction_id)
            .map_err(|err| Self::rpc_error(&err.to_string()))
    }

    async fn query_list_auctions(
        &self,
        pagination: PageRequest,
    ) -> Result<AuctionPage, ErrorObjectOwned> {
        let state = self.state.read();
        let (auctions, pagination) = state
            .app
            .marketplace
            .auctions(&pagination)
            .map_err(|err| Self::rpc_error(&err.to_string()))?;
        Ok(AuctionPage {
            auctions,
            pagination,
        })
    }

    async fn query_get_bid(&self, auction_id: u64) -> Result<Option<Bid>, ErrorObjectOwned> {
        let state = self.state.read();
        state
            .app
            .marketplace
            .current_bid(auction_id)
            .map_err(|err| Self::rpc_error(&err.to_string()))
    }

    async fn query_get_escrow(&self, address: String) -> Result<u128, ErrorObjectOwned> {
        let state = self.state.read();
        state
            .app
            .marketplace
            .escrow(&address)
            .map_err(|err| Self::rpc_error(&err.to_string()))
    }

    async fn query_get_address(
        &self,
        creator: String,
        network: String,
        label: String,
    ) -> Result<AddressRecord, ErrorObjectOwned> {
        let state = self.state.read();
        state
            .app
            .addressbook
            .record(&creator, &network, &label)
            .map_err(|err| Self::rpc_error(&err.to_string()))?
            .ok_or_else(|| Self::rpc_error("address record not found"))
    }

    async fn query_list_addresses(
        &self,
        pagination: PageRequest,
    ) -> Result<AddressPage, ErrorObjectOwned> {
        let state = self.state.read();
        let (addresses, pagination) = state
            .app
            .addressbook
            .records(&pagination)
            .map_err(|err| Self::rpc_error(&err.to_string()))?;
        Ok(AddressPage {
            addresses,
            pagination,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mock_chain=info".parse()?)
                .add_directive("jsonrpsee=warn".parse()?),
        )
        .init();

    let addr: SocketAddr = "127.0.0.1:9944".parse()?;

    info!("Starting mock chain server on {}", addr);

    let server = Server::builder().build(addr).await?;
    let handle = server.start(MockChainServer::new().into_rpc());

    info!("Mock chain server running. Press Ctrl+C to stop.");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutting down...");
    handle.stop()?;
    handle.stopped().await;

    Ok(())
}
