//! Error types for the storage crate.

use thiserror::Error;

/// Result type alias using the storage error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type for pipeline storage and aggregation operations.
///
/// A store failure is always distinct from "no data": lookups signal a
/// missing pipeline with `Ok(None)` and an aggregation may legitimately
/// return an empty record set.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying MongoDB driver failure (connectivity, timeout, malformed
    /// stage, deserialization).
    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    /// Failure raised outside the driver (in-memory fakes, scripted test
    /// errors).
    #[error("{0}")]
    Other(String),
}
