//! Exchange rate store port.
//!
//! Implementations can read a rate file, serve a fixed table for tests, etc.

use crate::domain::RateTable;
use crate::error::RateError;

/// Port trait for exchange rate stores.
///
/// Every call to [`load`](ExchangeRateStore::load) builds a brand new
/// [`RateTable`]. Nothing is cached between calls, so edits to the backing
/// data are visible on the next load.
#[async_trait::async_trait]
pub trait ExchangeRateStore: Send + Sync + 'static {
    /// Load the current exchange rates, overrides already applied.
    async fn load(&self) -> Result<RateTable, RateError>;
}
