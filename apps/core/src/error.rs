use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application-wide error type for the HTTP boundary.
///
/// Provider failures never appear here: the search adapters collapse them to
/// fallback values before a handler sees anything (see `search::ProviderError`).
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// Configuration-related errors (e.g. malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first declared message; the DTOs attach the exact
        // error strings the extension expects ("No text provided", ...).
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "success": false,
        }));

        (status, body).into_response()
    }
}
