//! # Converter Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, rate lookup, arithmetic)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: ExchangeRateStore`, allowing
//! different rate stores to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ConversionService;
