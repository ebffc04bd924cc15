//! CLI for interacting with the bazaar mock chain.
//!
//! This binary provides commands for:
//! - Creating, bidding on, and closing auctions
//! - Managing addressbook records
//! - Querying auctions, bids, escrow, and records

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::{Deserialize, Serialize};
use tracing::info;

use bazaar_runtime::Event;
use bazaar_types::{AddressRecord, Auction, Bid, PageRequest, PageResponse};

#[derive(Parser)]
#[command(name = "bazaar-cli")]
#[command(about = "CLI for the bazaar marketplace and addressbook modules")]
struct Cli {
    /// Mock chain RPC endpoint
    #[arg(long, default_value = "http://127.0.0.1:9944")]
    rpc: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new auction
    CreateAuction {
        /// Sender address (becomes the seller)
        #[arg(long)]
        sender: String,

        /// Sale denomination
        #[arg(long)]
        denom: String,

        /// Reserve price the first bid must exceed
        #[arg(long, default_value = "0")]
        reserve_price: u128,

        /// First block height of the bidding window
        #[arg(long)]
        start_height: u64,

        /// First block height after the bidding window
        #[arg(long)]
        end_height: u64,
    },

    /// Place a bid on an auction
    PlaceBid {
        /// Sender address (the bidder)
        #[arg(long)]
        sender: String,

        /// Auction id
        #[arg(long)]
        auction_id: u64,

        /// Bid amount
        #[arg(long)]
        amount: u128,

        /// Bid denomination
        #[arg(long)]
        denom: String,
    },

    /// Close an auction whose window has elapsed
    CloseAuction {
        /// Sender address
        #[arg(long)]
        sender: String,

        /// Auction id
        #[arg(long)]
        auction_id: u64,
    },

    /// Get auction details
    GetAuction {
        /// Auction id
        #[arg(long)]
        auction_id: u64,
    },

    /// List auctions
    ListAuctions {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get the current winning bid for an auction
    GetBid {
        /// Auction id
        #[arg(long)]
        auction_id: u64,
    },

    /// Get the escrowed total for an address
    GetEscrow {
        /// Account address
        #[arg(long)]
        address: String,
    },

    /// Register an addressbook record
    CreateAddress {
        /// Sender address (becomes the creator)
        #[arg(long)]
        sender: String,

        /// Network of the registered value, e.g. BTC
        #[arg(long)]
        network: String,

        /// Record label
        #[arg(long)]
        label: String,

        /// Registered remote address
        #[arg(long)]
        value: String,
    },

    /// Update an addressbook record
    UpdateAddress {
        #[arg(long)]
        sender: String,

        #[arg(long)]
        network: String,

        #[arg(long)]
        label: String,

        #[arg(long)]
        value: String,
    },

    /// Delete an addressbook record
    DeleteAddress {
        #[arg(long)]
        sender: String,

        #[arg(long)]
        network: String,

        #[arg(long)]
        label: String,
    },

    /// Look up an addressbook record
    GetAddress {
        #[arg(long)]
        creator: String,

        #[arg(long)]
        network: String,

        #[arg(long)]
        label: String,
    },

    /// List addressbook records
    ListAddresses {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Advance the chain by one block
    AdvanceBlock,

    /// Get current block info
    BlockInfo,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Number of entries to skip
    #[arg(long, default_value = "0")]
    offset: u64,

    /// Maximum number of entries to return
    #[arg(long, default_value = "50")]
    limit: u64,

    /// Resume at this key, as printed in a previous page's next_key
    #[arg(long)]
    page_key: Option<String>,

    /// Also count all matching entries
    #[arg(long)]
    count_total: bool,
}

impl PageArgs {
    fn into_request(self) -> Result<PageRequest> {
        let key = self
            .page_key
            .map(|raw| serde_json::from_str::<Vec<u8>>(&raw))
            .transpose()
            .map_err(|err| anyhow!("invalid --page-key: {err}"))?;
        Ok(PageRequest {
            key,
            offset: self.offset,
            limit: self.limit,
            count_total: self.count_total,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TxResult {
    auction_id: Option<u64>,
    events: Vec<Event>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BlockInfo {
    height: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct AuctionPage {
    auctions: Vec<Auction>,
    pagination: PageResponse,
}

#[derive(Debug, Serialize, Deserialize)]
struct AddressPage {
    addresses: Vec<AddressRecord>,
    pagination: PageResponse,
}

fn print_events(events: &[Event]) {
    for event in events {
        println!("  event: {}", event.kind);
        for attribute in &event.attributes {
            println!("    {}: {}", attribute.key, attribute.value);
        }
    }
}

fn print_pagination(pagination: &PageResponse) {
    if let Some(total) = pagination.total {
        println!("Total: {total}");
    }
    if let Some(next_key) = &pagination.next_key {
        println!(
            "Next key: {}",
            serde_json::to_string(next_key).unwrap_or_default()
        );
    }
}

async fn create_auction_cmd(client: &HttpClient, params: serde_json::Value) -> Result<()> {
    let result: TxResult = client.request("tx_createAuction", rpc_params![params]).await?;
    let auction_id = result
        .auction_id
        .ok_or_else(|| anyhow!("server returned no auction id"))?;

    info!("Created auction with id: {}", auction_id);
    println!("Auction id: {auction_id}");
    print_events(&result.events);
    Ok(())
}

async fn place_bid_cmd(
    client: &HttpClient,
    sender: &str,
    auction_id: u64,
    amount: u128,
    denom: &str,
) -> Result<()> {
    let params = serde_json::json!({
        "sender": sender,
        "auction_id": auction_id,
        "amount": amount,
        "denom": denom,
    });
    let result: TxResult = client.request("tx_placeBid", rpc_params![params]).await?;

    info!("Bid placed on auction {}", auction_id);
    println!("Bid placed successfully");
    println!("  Auction id: {auction_id}");
    println!("  Amount: {amount}{denom}");
    print_events(&result.events);
    Ok(())
}

async fn close_auction_cmd(client: &HttpClient, sender: &str, auction_id: u64) -> Result<()> {
    let params = serde_json::json!({
        "sender": sender,
        "auction_id": auction_id,
    });
    let result: TxResult = client.request("tx_closeAuction", rpc_params![params]).await?;

    println!("Auction {auction_id} closed");
    print_events(&result.events);
    Ok(())
}

async fn get_auction_cmd(client: &HttpClient, auction_id: u64) -> Result<()> {
    let auction: Option<Auction> = client
        .request("query_getAuction", rpc_params![auction_id])
        .await?;

    match auction {
        Some(a) => {
            println!("Auction {}:", a.id);
            println!("  Seller: {}", a.seller);
            println!("  Denom: {}", a.denom);
            println!("  Reserve: {}", a.reserve_price);
            println!("  Window: [{}, {})", a.start_height, a.end_height);
            println!("  Status: {}", a.status);
        }
        None => {
            println!("Auction {auction_id} not found");
        }
    }

    Ok(())
}

async fn list_auctions_cmd(client: &HttpClient, page: PageRequest) -> Result<()> {
    let page: AuctionPage = client
        .request("query_listAuctions", rpc_params![page])
        .await?;

    if page.auctions.is_empty() {
        println!("No auctions found");
    } else {
        println!("Auctions:");
        for a in &page.auctions {
            println!(
                "  [{}] seller={} reserve={}{} window=[{}, {}) {}",
                a.id, a.seller, a.reserve_price, a.denom, a.start_height, a.end_height, a.status
            );
        }
    }
    print_pagination(&page.pagination);

    Ok(())
}

async fn get_bid_cmd(client: &HttpClient, auction_id: u64) -> Result<()> {
    let bid: Option<Bid> = client.request("query_getBid", rpc_params![auction_id]).await?;

    match bid {
        Some(b) => {
            println!("Current bid for auction {auction_id}:");
            println!("  Bidder: {}", b.bidder);
            println!("  Amount: {}", b.amount);
        }
        None => {
            println!("No bid recorded for auction {auction_id}");
        }
    }

    Ok(())
}

async fn get_escrow_cmd(client: &HttpClient, address: &str) -> Result<()> {
    let held: u128 = client.request("query_getEscrow", rpc_params![address]).await?;
    println!("Escrow for {address}: {held}");
    Ok(())
}

async fn get_address_cmd(
    client: &HttpClient,
    creator: &str,
    network: &str,
    label: &str,
) -> Result<()> {
    let record: AddressRecord = client
        .request("query_getAddress", rpc_params![creator, network, label])
        .await?;

    println!("Address record:");
    println!("  Creator: {}", record.creator);
    println!("  Network: {}", record.network);
    println!("  Label: {}", record.label);
    println!("  Value: {}", record.value);
    Ok(())
}

async fn list_addresses_cmd(client: &HttpClient, page: PageRequest) -> Result<()> {
    let page: AddressPage = client
        .request("query_listAddresses", rpc_params![page])
        .await?;

    if page.addresses.is_empty() {
        println!("No address records found");
    } else {
        println!("Address records:");
        for record in &page.addresses {
            println!(
                "  {} {} {} -> {}",
                record.creator, record.network, record.label, record.value
            );
        }
    }
    print_pagination(&page.pagination);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bazaar_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let client = HttpClientBuilder::default().build(&cli.rpc)?;

    match cli.command {
        Commands::CreateAuction {
            sender,
            denom,
            reserve_price,
            start_height,
            end_height,
        } => {
            let params = serde_json::json!({
                "sender": sender,
                "denom": denom,
                "reserve_price": reserve_price,
                "start_height": start_height,
                "end_height": end_height,
            });
            create_auction_cmd(&client, params).await?;
        }

        Commands::PlaceBid {
            sender,
            auction_id,
            amount,
            denom,
        } => {
            place_bid_cmd(&client, &sender, auction_id, amount, &denom).await?;
        }

        Commands::CloseAuction { sender, auction_id } => {
            close_auction_cmd(&client, &sender, auction_id).await?;
        }

        Commands::GetAuction { auction_id } => {
            get_auction_cmd(&client, auction_id).await?;
        }

        Commands::ListAuctions { page } => {
            list_auctions_cmd(&client, page.into_request()?).await?;
        }

        Commands::GetBid { auction_id } => {
            get_bid_cmd(&client, auction_id).await?;
        }

        Commands::GetEscrow { address } => {
            get_escrow_cmd(&client, &address).await?;
        }

        Commands::CreateAddress {
            sender,
            network,
            label,
            value,
        } => {
            let params = serde_json::json!({
                "sender": sender,
                "network": network,
                "label": label,
                "value": value,
            });
            let result: TxResult = client.request("tx_createAddress", rpc_params![params]).await?;
            println!("Address record created");
            print_events(&result.events);
        }

        Commands::UpdateAddress {
            sender,
            network,
            label,
            value,
        } => {
            let params = serde_json::json!({
                "sender": sender,
                "network": network,
                "label": label,
                "value": value,
            });
            let result: TxResult = client.request("tx_updateAddress", rpc_params![params]).await?;
            println!("Address record updated");
            print_events(&result.events);
        }

        Commands::DeleteAddress {
            sender,
            network,
            label,
        } => {
            let params = serde_json::json!({
                "sender": sender,
                "network": network,
                "label": label,
            });
            let result: TxResult = client.request("tx_deleteAddress", rpc_params![params]).await?;
            println!("Address record deleted");
            print_events(&result.events);
        }

        Commands::GetAddress {
            creator,
            network,
            label,
        } => {
            get_address_cmd(&client, &creator, &network, &label).await?;
        }

        Commands::ListAddresses { page } => {
            list_addresses_cmd(&client, page.into_request()?).await?;
        }

        Commands::AdvanceBlock => {
            let block: BlockInfo = client.request("admin_advanceBlock", rpc_params![]).await?;
            println!("Block advanced: height={}", block.height);
        }

        Commands::BlockInfo => {
            let block: BlockInfo = client.request("chain_getBlockInfo", rpc_params![]).await?;
            println!("Current height: {}", block.height);
        }
    }

    Ok(())
}
