//! Error types for the conversion service.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::SupportedCurrencies;

/// Rate store errors (loading and lookup).
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    /// The rates directory is missing: a deployment/configuration problem.
    #[error("Exchange Rates Json folder is not present")]
    DirectoryMissing(PathBuf),

    #[error("Exchange Rates Json file is not present")]
    FileMissing(PathBuf),

    #[error("Exchange Rates Json file is malformed: {0}")]
    Deserialization(String),

    #[error("Invalid currency pair {from} , {to}")]
    RateNotFound { from: String, to: String },

    #[error("Failed to read exchange rates: {0}")]
    Io(String),
}

/// Field-level request validation failures, keyed by query parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty if the field passed.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, msgs.join("; ")))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Conversion errors produced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("One or more validation errors occurred: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid currency. Supported currency types are {0}")]
    UnsupportedCurrency(SupportedCurrencies),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("Converted amount is out of range")]
    Overflow,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Every variant is a client error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("One or more validation errors occurred.")]
    Validation(ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Validation(errors) => AppError::Validation(errors),
            ConversionError::UnsupportedCurrency(_) => AppError::BadRequest(err.to_string()),
            ConversionError::Rate(
                e @ (RateError::DirectoryMissing(_)
                | RateError::FileMissing(_)
                | RateError::RateNotFound { .. }),
            ) => AppError::NotFound(e.to_string()),
            ConversionError::Rate(e) => AppError::BadRequest(e.to_string()),
            ConversionError::Overflow => AppError::BadRequest(err.to_string()),
        }
    }
}
