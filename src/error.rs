//! Error types for the HTTP layer
//!
//! The telemetry core never fails; errors only arise while exposing snapshots.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Errors raised while rendering a response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Snapshot could not be encoded
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
