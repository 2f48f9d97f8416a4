use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use swapbook::config::Config;
use swapbook::exchange::{Event, ExchangeSession, TokioDelay};
use swapbook::models::{Prices, WalletBalance};
use swapbook::wallet;

#[derive(Parser)]
#[command(name = "swapbook")]
#[command(about = "Currency swap and wallet valuation")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "swapbook.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an amount between two catalog currencies
    Convert {
        amount: String,
        /// Send currency code; defaults to the first catalog entry
        #[arg(long)]
        send: Option<String>,
        /// Receive currency code; defaults to the second catalog entry
        #[arg(long)]
        receive: Option<String>,
    },
    /// Prioritize, format, and value a wallet balance list
    Balances {
        /// JSON file with `balances` and `prices`
        file: PathBuf,
    },
    /// Show current configuration
    Config,
}

/// Input shape for the `balances` command: the in-memory data an account
/// and price provider would hand the core.
#[derive(Deserialize)]
struct BalancesInput {
    balances: Vec<WalletBalance>,
    prices: Prices,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Convert {
            amount,
            send,
            receive,
        } => {
            let catalog = config.catalog()?;
            let mut pair = catalog
                .initial_pair()
                .context("Config defines no currencies")?;
            if let Some(code) = send {
                pair.send = catalog
                    .get(&code)
                    .with_context(|| format!("Unknown currency: {code}"))?
                    .clone();
            }
            if let Some(code) = receive {
                pair.receive = catalog
                    .get(&code)
                    .with_context(|| format!("Unknown currency: {code}"))?
                    .clone();
            }

            let mut session = ExchangeSession::new(pair)
                .with_delay(Arc::new(TokioDelay::new(config.settlement_delay())));
            session.dispatch(Event::AmountChanged(amount)).await;
            session.dispatch(Event::Submitted).await;

            let state = session.state();
            if let Some(error) = &state.validation {
                bail!("Conversion failed: {error}");
            }
            println!("{}", state.amounts.receive);
        }
        Command::Balances { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read balances file: {}", file.display()))?;
            let input: BalancesInput = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse balances file: {}", file.display()))?;

            let rows = wallet::build_rows(&input.balances, &input.prices, &config.priority_table())?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Config => {
            println!("Config file: {}", cli.config.display());
            println!("Settlement delay: {} ms", config.settlement_ms);
            println!("Currencies: {}", config.currencies.len());
            for record in &config.currencies {
                println!(
                    "  {} = {} USD (as of {})",
                    record.code, record.unit_price_usd, record.as_of_date
                );
            }
        }
    }

    Ok(())
}
