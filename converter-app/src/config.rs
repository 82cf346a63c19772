//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use converter_types::SupportedCurrencies;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub supported_currencies: SupportedCurrencies,
    /// Directory containing `ExchangeRateFile/`.
    pub rates_root: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let supported_currencies: SupportedCurrencies = lookup("SUPPORTED_CURRENCIES")
            .ok_or_else(|| anyhow::anyhow!("SUPPORTED_CURRENCIES environment variable is required"))?
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        if supported_currencies.is_empty() {
            anyhow::bail!("SUPPORTED_CURRENCIES must list at least one currency code");
        }

        let rates_root = match lookup("RATES_ROOT") {
            Some(root) => PathBuf::from(root),
            None => env::current_dir()?,
        };

        Ok(Self {
            port,
            supported_currencies,
            rates_root,
        })
    }
}
