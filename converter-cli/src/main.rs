//! Converter CLI
//!
//! Command-line interface for the Currency Converter API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use converter_client::ConverterClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency Converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Converter API
    #[arg(
        long,
        env = "CONVERTER_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code (e.g. USD)
        source: String,
        /// Target currency code (e.g. EUR)
        target: String,
        /// Amount to convert (up to 4 decimal places)
        amount: Decimal,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Convert {
            source,
            target,
            amount,
        } => {
            let result = client.convert(&source, &target, amount).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
