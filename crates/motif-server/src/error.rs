//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` so every failure path produces
//! a structured JSON body with an appropriate status code -- malformed input
//! never surfaces as a framework default error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use motif_core::MotifError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not JSON or lacks a string `motif` key (400).
    ///
    /// The body text is fixed for compatibility with existing callers that
    /// match on it.
    #[error("no motif provided")]
    MissingMotif,

    /// Motif text failed to parse under the grammar (422).
    #[error("invalid motif: {0}")]
    InvalidMotif(MotifError),

    /// Unexpected internal failure (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<MotifError> for ApiError {
    fn from(err: MotifError) -> Self {
        match err {
            MotifError::Syntax { .. } | MotifError::ConflictingEdge { .. } => {
                ApiError::InvalidMotif(err)
            }
            // Sanitized input can never reach the file-load path; an I/O
            // error here means something is wrong with the process itself.
            MotifError::Io(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingMotif => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "status": "No motif provided." }),
            ),
            ApiError::InvalidMotif(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "status": "Invalid motif.",
                    "error": err.to_string(),
                }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "status": "Internal server error." }),
                )
            }
        };
        (status, axum::Json(body)).into_response()
    }
}
