//! Currency codes, pairs, and the configured allow-list.

use std::fmt;
use std::str::FromStr;

/// Length every ISO-style currency code must have.
pub const CURRENCY_CODE_LEN: usize = 3;

/// An ordered (source, target) currency pair.
///
/// Codes are kept exactly as the caller supplied them so error messages can
/// echo the request. [`key`](CurrencyPair::key) normalizes case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub source: String,
    pub target: String,
}

impl CurrencyPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the rate table key, e.g. `USD_TO_EUR`.
    pub fn key(&self) -> String {
        format!(
            "{}_TO_{}",
            self.source.to_uppercase(),
            self.target.to_uppercase()
        )
    }
}

/// Currencies the service accepts, in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportedCurrencies {
    codes: Vec<String>,
}

impl SupportedCurrencies {
    /// Builds the allow-list, rejecting any code that isn't three characters.
    pub fn new<I, S>(codes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();

        if let Some(bad) = codes
            .iter()
            .find(|c| c.chars().count() != CURRENCY_CODE_LEN)
        {
            return Err(format!("Invalid supported currency code: '{}'", bad));
        }

        Ok(Self { codes })
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for SupportedCurrencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codes.join(", "))
    }
}

impl FromStr for SupportedCurrencies {
    type Err = String;

    /// Parses a comma-separated list such as `USD, INR, EUR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_upper_cased() {
        let pair = CurrencyPair::new("usd", "Eur");
        assert_eq!(pair.key(), "USD_TO_EUR");
    }

    #[test]
    fn test_supported_parse_keeps_order() {
        let supported: SupportedCurrencies = "USD, INR,EUR".parse().unwrap();
        assert_eq!(supported.to_string(), "USD, INR, EUR");
        assert_eq!(
            supported,
            SupportedCurrencies::new(["USD", "INR", "EUR"]).unwrap()
        );
    }

    #[test]
    fn test_supported_contains_ignores_case() {
        let supported: SupportedCurrencies = "USD,INR,EUR".parse().unwrap();
        assert!(supported.contains("usd"));
        assert!(supported.contains("Eur"));
        assert!(!supported.contains("ABC"));
    }

    #[test]
    fn test_supported_rejects_bad_code() {
        let err = "USD,EURO".parse::<SupportedCurrencies>().unwrap_err();
        assert!(err.contains("EURO"));
    }
}
