//! Exchange rate stores.
//!
//! Implementations of the [`ExchangeRateStore`] port:
//!
//! - [`FileRateStore`] reads `ExchangeRateFile/exchangeRates.json` and lets
//!   environment variables override individual pairs.
//! - [`StaticRateStore`] serves a fixed table, for development and testing.
//!
//! # Example
//! ```no_run
//! use converter_types::ExchangeRateStore;
//! use exchange_rates::FileRateStore;
//!
//! # async fn run() -> Result<(), converter_types::RateError> {
//! // Reads ./ExchangeRateFile/exchangeRates.json
//! let store = FileRateStore::new(".");
//! let rates = store.load().await?;
//! let rate = rates.get_rate("USD", "EUR")?;
//! println!("1 USD = {} EUR", rate);
//! # Ok(())
//! # }
//! ```

mod file;
mod fixed;
mod overrides;

pub use converter_types::ExchangeRateStore;
pub use file::{FileRateStore, RATES_DIR_NAME, RATES_FILE_NAME, parse_rates};
pub use fixed::StaticRateStore;
pub use overrides::{OverrideSource, ProcessEnv, apply_overrides, parse_decimal};
