//! Error types for the server.
//!
//! Every failure the API can return is an [`ApiError`] variant; the wire
//! body is always `{"error": <string>}` so clients handle all stages
//! uniformly. Raw stack traces never reach the wire — full detail is
//! logged server-side before the response is built.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use gamelens_llm::LlmError;
use gamelens_store::StoreError;

/// Server error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `name` query parameter was absent or empty.
    #[error("Missing pipeline name")]
    MissingName,

    /// No stored pipeline matches the supplied name.
    #[error("No pipeline named “{0}”")]
    UnknownPipeline(String),

    /// The document store failed (lookup or aggregation execution).
    #[error("MongoDB error: {0}")]
    Store(#[from] StoreError),

    /// The summarization provider failed.
    #[error("Gemini error: {0}")]
    Summarize(#[from] LlmError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::UnknownPipeline(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Summarize(_) | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            ApiError::Store(_) | ApiError::Summarize(_) | ApiError::Serialization(_) => {
                tracing::error!(status = %status, error = %message, "Server error");
            }
            _ => {
                tracing::warn!(status = %status, error = %message, "Client error");
            }
        }

        let body = ErrorBody { error: message };
        (status, Json(body)).into_response()
    }
}
