//! # Converter Client SDK
//!
//! A typed Rust client for the Currency Converter API.

use converter_types::{ConversionResponse, ConvertQuery};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Converts `amount` from `source` to `target`.
    pub async fn convert(
        &self,
        source: &str,
        target: &str,
        amount: Decimal,
    ) -> Result<ConversionResponse, ClientError> {
        let query = ConvertQuery::new(source, target, &amount.to_string());
        self.get("/convert", &query).await
    }

    async fn get<T: DeserializeOwned, Q: serde::Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            decode_body(&body)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Decodes a success body. Amounts are read as exact decimals, never as `f64`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    Ok(serde_json::from_str(body)?)
}

/// Pulls a readable message out of an error body.
///
/// Validation failures carry per-field messages, which are more useful than
/// the generic summary.
fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    if let Some(fields) = json.get("errors").and_then(|e| e.as_object()) {
        let parts: Vec<String> = fields
            .iter()
            .flat_map(|(field, msgs)| {
                msgs.as_array()
                    .into_iter()
                    .flatten()
                    .filter_map(|m| m.as_str())
                    .map(move |m| format!("{}: {}", field, m))
            })
            .collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    json.get("error")
        .and_then(|e| e.as_str())
        .map(String::from)
        .unwrap_or_else(|| body.to_string())
}
