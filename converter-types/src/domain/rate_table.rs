//! Immutable exchange rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::CurrencyPair;
use crate::error::RateError;

/// Rates keyed by `"{SOURCE}_TO_{TARGET}"`.
///
/// A table is built once per load and never mutated afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, Decimal>) -> Self {
        Self { rates }
    }

    /// Looks up the rate for converting `source` into `target`.
    ///
    /// There is no inverse-pair fallback: a missing `EUR_TO_USD` is not
    /// derived from `USD_TO_EUR`.
    pub fn get_rate(&self, source: &str, target: &str) -> Result<Decimal, RateError> {
        let pair = CurrencyPair::new(source, target);
        self.rates
            .get(&pair.key())
            .copied()
            .ok_or(RateError::RateNotFound {
                from: pair.source,
                to: pair.target,
            })
    }
}

impl FromIterator<(String, Decimal)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
