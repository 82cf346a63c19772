//! Domain models for the conversion service.

pub mod currency;
pub mod rate_table;

pub use currency::{CurrencyPair, SupportedCurrencies};
pub use rate_table::RateTable;
