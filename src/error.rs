//! HTTP error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every business-logic failure maps to one of four client-visible
//! categories; anything else (datastore faults, hashing faults) is logged
//! and collapses to a generic 500 so internals never leak. Response bodies
//! are always `{"msg": "..."}` JSON.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input (400).
    #[error("{0}")]
    Validation(String),
    /// Duplicate username (400).
    #[error("{0}")]
    Conflict(String),
    /// Bad credentials or missing/invalid/expired token (401).
    #[error("{0}")]
    Auth(String),
    /// Resource absent, or owned by someone else (404).
    #[error("{0}")]
    NotFound(String),
    /// Anything the client should not learn details about (500).
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "msg": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
