use std::path::PathBuf;

use anyhow::Context;
use bx_app::config_loader;
use bx_app::tracing_setup;
use bx_http::BittrexClient;
use bx_types::OrderBookType;
use clap::Parser;
use clap::Subcommand;
use serde::Serialize;
use tracing::info;

/// Query the Bittrex public market-data API and print the result as JSON
#[derive(Debug, Parser)]
#[command(name = "bx_public", version)]
struct Cli {
    /// Configuration file holding the `bittrex_public_api` section
    #[arg(long, default_value = "conf.json")]
    config: PathBuf,

    /// Directory for rolling log files
    #[arg(long, default_value = "./logs")]
    log_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// All supported currencies
    Currencies,
    /// All open markets
    Markets,
    /// Current tick for a market
    Ticker { market: String },
    /// 24 hour summaries of all markets
    Summaries,
    /// 24 hour summary of one market
    Summary { market: String },
    /// Order book of a market
    OrderBook {
        market: String,
        /// buy, sell or both
        #[arg(long, default_value_t = OrderBookType::Both)]
        side: OrderBookType,
    },
    /// Latest trades of a market
    History { market: String },
}

fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config_loader::load_public_api_config(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    // Keep guard alive for entire application lifetime
    let level = config_loader::parse_log_level(&config.log_level);
    let _guard = tracing_setup::init("bx_public", &cli.log_dir, level)
        .with_context(|| format!("creating log directory {}", cli.log_dir))?;

    let client = BittrexClient::from_config(&config).context("creating API client")?;
    info!(api_url = client.base_url(), max_requests_sec = config.max_requests_sec, "Client ready");

    let output = match &cli.command {
        Command::Currencies => to_pretty_json(&client.currencies().await?)?,
        Command::Markets => to_pretty_json(&client.markets().await?)?,
        Command::Ticker { market } => to_pretty_json(&client.ticker(market).await?)?,
        Command::Summaries => to_pretty_json(&client.market_summaries().await?)?,
        Command::Summary { market } => to_pretty_json(&client.market_summary(market).await?)?,
        Command::OrderBook { market, side } => to_pretty_json(&client.order_book(market, *side).await?)?,
        Command::History { market } => to_pretty_json(&client.market_history(market).await?)?,
    };

    println!("{output}");

    Ok(())
}
