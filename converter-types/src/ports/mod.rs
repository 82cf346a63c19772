//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete implementations.

mod exchange;

pub use exchange::ExchangeRateStore;
