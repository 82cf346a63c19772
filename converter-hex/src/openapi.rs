//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use converter_types::dto::{ConversionResponse, ConvertQuery};
use utoipa::OpenApi;

use crate::inbound::handlers::ErrorResponse;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between two supported currencies
#[utoipa::path(
    get,
    path = "/convert",
    tag = "conversion",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Conversion succeeded", body = ConversionResponse),
        (status = 400, description = "Invalid parameters, unsupported currency, or unreadable rate data", body = ErrorResponse,
            example = json!({"error": "Invalid currency. Supported currency types are USD, INR, EUR", "code": 400})),
        (status = 404, description = "Rate file missing or currency pair not in the rate table", body = ErrorResponse,
            example = json!({"error": "Invalid currency pair USD , JPY", "code": 404}))
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Currency Converter API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts amounts between currencies using rates from `ExchangeRateFile/exchangeRates.json`.\n\nAny rate can be overridden per deployment by setting an environment variable named after its pair key, e.g. `USD_TO_EUR=0.8`.",
        license(name = "MIT"),
    ),
    paths(health, convert),
    components(schemas(ConversionResponse, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversion", description = "Currency conversion"),
    )
)]
pub struct ApiDoc;
