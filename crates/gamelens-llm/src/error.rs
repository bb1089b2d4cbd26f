//! Error types for the summarization crate.

use thiserror::Error;

/// Result type alias using the summarization error type.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Error type for summarization operations.
///
/// Every failure mode of the external provider surfaces here with a
/// human-readable cause; the HTTP layer decides what the client sees.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider-side error (non-success status, empty response).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Network/connectivity error.
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error (API key missing, etc.).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            LlmError::Network(format!("Connection failed: {}", err))
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Serialization(err.to_string())
    }
}
