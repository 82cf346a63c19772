//! # Converter Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (CurrencyPair, SupportedCurrencies, RateTable)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Rate store, conversion and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyPair, RateTable, SupportedCurrencies};
pub use dto::*;
pub use error::{AppError, ConversionError, RateError, ValidationErrors};
pub use ports::ExchangeRateStore;
