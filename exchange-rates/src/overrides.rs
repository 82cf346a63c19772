//! Environment-variable rate overrides.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Where rate overrides are looked up.
///
/// The production source is the process environment; tests substitute a map.
pub trait OverrideSource: Send + Sync + 'static {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads overrides from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl OverrideSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Parses a decimal written in plain or scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Replaces every rate whose upper-cased key is set in `source`.
///
/// Missing, empty, or unparseable overrides leave the file value in place.
pub fn apply_overrides<S: OverrideSource + ?Sized>(
    rates: &mut HashMap<String, Decimal>,
    source: &S,
) {
    for (key, rate) in rates.iter_mut() {
        let name = key.to_uppercase();
        let Some(raw) = source.lookup(&name) else {
            continue;
        };

        match parse_decimal(&raw) {
            Some(value) => {
                tracing::debug!(key = %name, file_rate = %rate, override_rate = %value, "Applying rate override");
                *rate = value;
            }
            None => {
                tracing::debug!(key = %name, value = %raw, "Ignoring unparseable rate override");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal("0.8"), Some(dec!(0.8)));
        assert_eq!(parse_decimal(" 100 "), Some(dec!(100)));
        assert_eq!(parse_decimal("1e2"), Some(dec!(100)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_override_replaces_matching_key() {
        let mut rates = HashMap::from([
            ("USD_TO_EUR".to_string(), dec!(0.85)),
            ("EUR_TO_INR".to_string(), dec!(88)),
        ]);
        apply_overrides(&mut rates, &env(&[("USD_TO_EUR", "0.8")]));

        assert_eq!(rates["USD_TO_EUR"], dec!(0.8));
        assert_eq!(rates["EUR_TO_INR"], dec!(88));
    }

    #[test]
    fn test_override_uses_upper_cased_name() {
        let mut rates = HashMap::from([("usd_to_inr".to_string(), dec!(83))]);
        apply_overrides(&mut rates, &env(&[("USD_TO_INR", "100")]));

        assert_eq!(rates["usd_to_inr"], dec!(100));
    }

    #[test]
    fn test_unparseable_override_ignored() {
        let mut rates = HashMap::from([("USD_TO_EUR".to_string(), dec!(0.85))]);
        apply_overrides(&mut rates, &env(&[("USD_TO_EUR", "not-a-rate")]));

        assert_eq!(rates["USD_TO_EUR"], dec!(0.85));
    }

    #[test]
    fn test_override_never_adds_keys() {
        let mut rates = HashMap::from([("USD_TO_EUR".to_string(), dec!(0.85))]);
        apply_overrides(&mut rates, &env(&[("EUR_TO_USD", "1.2")]));

        assert_eq!(rates.len(), 1);
    }
}
