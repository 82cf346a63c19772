//! # Currency Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the file-backed rate store
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_hex::{ConversionService, inbound::HttpServer};
use exchange_rates::FileRateStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,converter_app=debug,converter_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting currency converter on port {}", config.port);
    tracing::info!("Supported currencies: {}", config.supported_currencies);

    // Rates are re-read from disk on every request
    let store = FileRateStore::new(config.rates_root.clone());
    tracing::info!("Reading exchange rates from {}", store.rates_file().display());

    // Create the conversion service
    let service = ConversionService::new(store, config.supported_currencies);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
