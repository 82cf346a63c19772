//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use converter_types::{AppError, ConvertQuery, ExchangeRateStore, ValidationErrors};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<S: ExchangeRateStore> {
    pub service: ConversionService<S>,
}

/// Error payload returned for every 4xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
    /// Field-level messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<ValidationErrors>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<converter_types::ConversionError> for ApiError {
    fn from(err: converter_types::ConversionError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self.0 {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "One or more validation errors occurred.".to_string(),
                Some(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount from one currency to another.
#[tracing::instrument(skip(state))]
pub async fn convert<S: ExchangeRateStore>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let resp = state.service.convert(&query).await?;
    Ok(Json(resp))
}
