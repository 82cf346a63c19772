//! Data Transfer Objects (DTOs) for requests and responses.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::CurrencyPair;
use crate::domain::currency::CURRENCY_CODE_LEN;
use crate::error::ValidationErrors;

pub const SOURCE_CURRENCY_FIELD: &str = "SourceCurrency";
pub const TARGET_CURRENCY_FIELD: &str = "TargetCurrency";
pub const AMOUNT_FIELD: &str = "Amount";

/// Digits with at most four fractional digits. No sign, no exponent.
static AMOUNT_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.(\d{1,4}))?$").expect("valid amount regex"));

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Raw `/convert` query string.
///
/// Every field is optional text so that missing or malformed values turn into
/// field-level validation messages instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Three letter code of the currency to convert from
    #[serde(
        rename = "SourceCurrency",
        alias = "sourceCurrency",
        alias = "source_currency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[param(example = "USD")]
    pub source_currency: Option<String>,

    /// Three letter code of the currency to convert to
    #[serde(
        rename = "TargetCurrency",
        alias = "targetCurrency",
        alias = "target_currency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[param(example = "EUR")]
    pub target_currency: Option<String>,

    /// Amount to convert, greater than zero with at most 4 decimal places
    #[serde(
        rename = "Amount",
        alias = "amount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[param(example = "10.5")]
    pub amount: Option<String>,
}

impl ConvertQuery {
    pub fn new(source: &str, target: &str, amount: &str) -> Self {
        Self {
            source_currency: Some(source.to_string()),
            target_currency: Some(target.to_string()),
            amount: Some(amount.to_string()),
        }
    }
}

/// A conversion request whose fields have all passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub pair: CurrencyPair,
    pub amount: Decimal,
}

impl ConversionRequest {
    /// Validates every field independently and collects all failures.
    pub fn validate(query: &ConvertQuery) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let source = validate_code(
            SOURCE_CURRENCY_FIELD,
            query.source_currency.as_deref(),
            &mut errors,
        );
        let target = validate_code(
            TARGET_CURRENCY_FIELD,
            query.target_currency.as_deref(),
            &mut errors,
        );
        let amount = validate_amount(query.amount.as_deref(), &mut errors);

        match (source, target, amount) {
            (Some(source), Some(target), Some(amount)) if errors.is_empty() => Ok(Self {
                pair: CurrencyPair::new(source, target),
                amount,
            }),
            _ => Err(errors),
        }
    }

    pub fn source(&self) -> &str {
        &self.pair.source
    }

    pub fn target(&self) -> &str {
        &self.pair.target
    }
}

fn required(field: &str, value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.add(field, format!("The {} field is required.", field));
            None
        }
    }
}

fn validate_code(field: &str, value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    let code = required(field, value, errors)?;
    if code.chars().count() != CURRENCY_CODE_LEN {
        errors.add(field, "Currency code must be of three characters length");
        return None;
    }
    Some(code)
}

fn validate_amount(value: Option<&str>, errors: &mut ValidationErrors) -> Option<Decimal> {
    let raw = required(AMOUNT_FIELD, value, errors)?;

    let parsed = match Decimal::from_str(&raw) {
        Ok(amount) => amount,
        Err(_) => {
            errors.add(
                AMOUNT_FIELD,
                format!("The value '{}' is not valid for {}.", raw, AMOUNT_FIELD),
            );
            return None;
        }
    };

    let mut valid = true;
    if parsed <= Decimal::ZERO {
        errors.add(AMOUNT_FIELD, "Amount must be greater than zero");
        valid = false;
    }
    if !AMOUNT_FORMAT.is_match(&raw) {
        errors.add(AMOUNT_FIELD, "Invalid Amount format");
        valid = false;
    }

    valid.then_some(parsed)
}

/// Successful conversion payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    /// Rate applied to the amount
    #[serde(rename = "ExchangeRate", with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 0.85)]
    pub exchange_rate: Decimal,
    /// `Amount * ExchangeRate`
    #[serde(rename = "ConvertedAmount", with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 8.5)]
    pub converted_amount: Decimal,
}
