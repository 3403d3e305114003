use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use unibook_rs::config::AppConfig;
use unibook_rs::market_data::adapters::IndexerSource;
use unibook_rs::market_data::market::MarketInfo;
use unibook_rs::market_data::normaliser::format_micros;
use unibook_rs::market_data::view::OrderbookView;
use unibook_rs::telemetry;
use unibook_rs::tools::{tool_definitions, ToolCall, ToolRouter};

#[derive(Debug, Parser)]
#[command(
    name = "unibook",
    version,
    about = "Unified YES-denominated orderbooks for binary markets"
)]
struct Cli {
    /// Config file (defaults to ./unibook.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and print the unified orderbook
    Book {
        market: Option<String>,
        /// Max entries per side
        #[arg(long)]
        depth: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Fetch and print a market record
    Market {
        market: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print tool definitions as JSON
    Tools,
    /// Dispatch one tool call given as JSON,
    /// e.g. '{"name":"get_orderbook","arguments":{"marketId":"m1"}}'
    Call { request: String },
}

// Helper function to print a human-readable book
fn print_book(view: &OrderbookView) {
    let row = |side: &str, price: &str, qty: &str, origin: String, escrow: &str| {
        println!("{:<8} {:>14} {:>18}  {:<18} {}", side, price, qty, origin, escrow);
    };

    println!("\n=== {} ===", view.market_id);
    row("side", "yes price", "quantity", "origin".to_string(), "escrow");
    for ask in view.asks.iter().rev() {
        row("ASK", &ask.price, &ask.quantity, format!("{:?}", ask.origin), &ask.escrow_id);
    }
    println!("{}", "-".repeat(72));
    for bid in &view.bids {
        row("BID", &bid.price, &bid.quantity, format!("{:?}", bid.origin), &bid.escrow_id);
    }

    match &view.spread {
        Some(spread) => println!("Spread: {}", spread),
        None => println!("Spread: N/A"),
    }
    if let Some(mid) = &view.mid_price {
        println!("Mid: {}", mid);
    }
    if view.crossed {
        println!("Book is crossed across outcomes");
    }
    println!("Total orders: {}", view.total_orders);
}

// Helper function to print a market record; API-only fields show as N/A for on-chain markets
fn print_market(market: &MarketInfo) {
    println!("\n=== {} ===", market.market_id);
    println!("Question: {}", market.question);
    println!("YES token: {}", market.yes_token);
    println!("NO token:  {}", market.no_token);
    match market.volume() {
        Some(volume) => println!("Volume: {}", format_micros(volume)),
        None => println!("Volume: N/A"),
    }
    println!("Category: {}", market.category().unwrap_or("N/A"));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env

    let cli = Cli::parse();

    if let Command::Tools = cli.command {
        println!("{}", serde_json::to_string_pretty(&tool_definitions())?);
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let config = Arc::new(config);
    telemetry::init_tracing(&config.log.filter);
    telemetry::init_metrics()?;
    tracing::debug!(server = %config.server.name, version = %config.server.version, "Starting");

    let source = IndexerSource::new(&config.indexer)?;
    let router = ToolRouter::new(source, Arc::clone(&config));

    match cli.command {
        Command::Book { market, depth, json } => {
            let view = router.orderbook(market.as_deref(), depth).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_book(&view);
            }
        }
        Command::Market { market, json } => {
            let market = router.market(market.as_deref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&market)?);
            } else {
                print_market(&market);
            }
        }
        Command::Call { request } => {
            let value = serde_json::from_str(&request).context("tool call is not valid JSON")?;
            let result = router.call(ToolCall::from_json(value)?).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Tools => {}
    }

    Ok(())
}
