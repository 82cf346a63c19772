//! Client example demonstrating conversions against a running server.
//!
//! Run with: cargo run -p converter-app --example client_example

use converter_client::ConverterClient;
use converter_hex::{ConversionService, inbound::HttpServer};
use exchange_rates::{FileRateStore, RATES_DIR_NAME, RATES_FILE_NAME};
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Lay out a temp rates file
    let tmp = tempdir()?;
    let rates_dir = tmp.path().join(RATES_DIR_NAME);
    std::fs::create_dir(&rates_dir)?;
    std::fs::write(
        rates_dir.join(RATES_FILE_NAME),
        r#"{"USD_TO_EUR": 0.85, "USD_TO_INR": 83.12, "EUR_TO_INR": 88}"#,
    )?;

    println!("🚀 Starting server on {addr}...");
    println!("   Rates: {}", rates_dir.join(RATES_FILE_NAME).display());

    // Start server in background
    let store = FileRateStore::new(tmp.path());
    let service = ConversionService::new(store, "USD,INR,EUR".parse().map_err(anyhow::Error::msg)?);
    let server = HttpServer::new(service);
    let handle = tokio::spawn(server.serve(listener));

    // Create client
    let client = ConverterClient::new(format!("http://{addr}"));

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Successful conversions
    for (source, target, amount) in [("USD", "EUR", "10.0"), ("EUR", "INR", "20"), ("usd", "inr", "1.5")] {
        let result = client.convert(source, target, amount.parse()?).await?;
        println!(
            "✅ {amount} {source} -> {} {target} (rate {})",
            result.converted_amount, result.exchange_rate
        );
    }

    // Failures come back as API errors
    let unsupported = client.convert("USD", "ABC", "10".parse()?).await;
    println!("✅ Unsupported currency rejected: {}", unsupported.unwrap_err());

    let missing_pair = client.convert("EUR", "USD", "10".parse()?).await;
    println!("✅ Missing pair rejected: {}", missing_pair.unwrap_err());

    println!("\n🎉 Example completed successfully!");

    handle.abort();
    Ok(())
}
