//! Fixed in-memory rate store.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use converter_types::{CurrencyPair, ExchangeRateStore, RateError, RateTable};

/// Store that always returns the same rates.
///
/// Useful for development servers and tests that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct StaticRateStore {
    rates: HashMap<String, Decimal>,
}

impl StaticRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rate for `source` -> `target`.
    pub fn with_rate(mut self, source: &str, target: &str, rate: Decimal) -> Self {
        self.rates
            .insert(CurrencyPair::new(source, target).key(), rate);
        self
    }
}

#[async_trait]
impl ExchangeRateStore for StaticRateStore {
    async fn load(&self) -> Result<RateTable, RateError> {
        Ok(RateTable::new(self.rates.clone()))
    }
}
