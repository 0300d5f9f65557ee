//! Error types for the gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway error taxonomy
///
/// Routing mismatches (404/405) are produced directly by the router and
/// never pass through this type. Everything that does reach this type
/// collapses to the same opaque 500 body toward the caller; the detail
/// only goes to the diagnostic log.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body is not valid JSON or the transcript is unusable
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The retrieval backend rejected the call or failed
    #[error("retrieval backend error: {0}")]
    Retrieval(String),

    /// HTTP transport failure talking to the retrieval backend
    #[error("retrieval transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // One diagnostic entry per failed request; the response body
        // never carries internal failure detail.
        tracing::error!(error = %self, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to process request" })),
        )
            .into_response()
    }
}
