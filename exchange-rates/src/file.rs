//! JSON rate file store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::value::RawValue;

use converter_types::{ExchangeRateStore, RateError, RateTable};

use crate::overrides::{OverrideSource, ProcessEnv, apply_overrides, parse_decimal};

/// Directory, relative to the store root, that holds the rate file.
pub const RATES_DIR_NAME: &str = "ExchangeRateFile";

/// Name of the rate file inside [`RATES_DIR_NAME`].
pub const RATES_FILE_NAME: &str = "exchangeRates.json";

/// Rate store backed by `<root>/ExchangeRateFile/exchangeRates.json`.
///
/// The file is re-read on every [`load`](ExchangeRateStore::load), so edits
/// to it or to the override variables apply without a restart.
#[derive(Clone)]
pub struct FileRateStore {
    root: PathBuf,
    overrides: Arc<dyn OverrideSource>,
}

impl FileRateStore {
    /// Creates a store rooted at `root`, with overrides from the process
    /// environment.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: Arc::new(ProcessEnv),
        }
    }

    /// Replaces the override source.
    pub fn with_overrides(mut self, overrides: impl OverrideSource) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    pub fn rates_dir(&self) -> PathBuf {
        self.root.join(RATES_DIR_NAME)
    }

    pub fn rates_file(&self) -> PathBuf {
        self.rates_dir().join(RATES_FILE_NAME)
    }
}

impl std::fmt::Debug for FileRateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRateStore")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ExchangeRateStore for FileRateStore {
    async fn load(&self) -> Result<RateTable, RateError> {
        let dir = self.rates_dir();
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(RateError::DirectoryMissing(dir)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RateError::DirectoryMissing(dir));
            }
            Err(e) => return Err(RateError::Io(e.to_string())),
        }

        let path = dir.join(RATES_FILE_NAME);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RateError::FileMissing(path));
            }
            Err(e) => return Err(RateError::Io(e.to_string())),
        };

        let mut rates = parse_rates(&json)?;
        apply_overrides(&mut rates, self.overrides.as_ref());

        tracing::debug!(path = %path.display(), pairs = rates.len(), "Loaded exchange rates");
        Ok(RateTable::new(rates))
    }
}

/// Parses a flat JSON object of pair key to numeric rate.
///
/// Numbers are parsed from their literal text so `0.85` stays exactly `0.85`.
/// A leading UTF-8 byte order mark is skipped.
pub fn parse_rates(json: &str) -> Result<HashMap<String, Decimal>, RateError> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let raw: HashMap<String, Box<RawValue>> =
        serde_json::from_str(json).map_err(|e| RateError::Deserialization(e.to_string()))?;

    raw.into_iter()
        .map(|(key, value)| {
            let text = value.get();
            // Only bare JSON numbers; quoted strings and null are rejected.
            let rate = if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
                parse_decimal(text)
            } else {
                None
            };

            rate.map(|rate| (key.clone(), rate)).ok_or_else(|| {
                RateError::Deserialization(format!(
                    "value {} for '{}' is not a decimal number",
                    text, key
                ))
            })
        })
        .collect()
}
