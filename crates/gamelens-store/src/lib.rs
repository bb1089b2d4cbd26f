//! MongoDB access layer for GameLens.
//!
//! This crate owns the two storage-facing seams of the system:
//!
//! - [`PipelineStore`] looks up named, precomputed aggregation-pipeline
//!   definitions from the pipelines collection.
//! - [`AggregationRunner`] executes a definition's stages against the
//!   game-records collection.
//!
//! Both are object-safe traits so the HTTP layer can be exercised with the
//! in-memory fakes ([`MemoryPipelineStore`], [`MockAggregationRunner`])
//! instead of a live database.

pub mod aggregate;
pub mod error;
pub mod pipelines;
pub mod types;

pub use aggregate::{AggregationRunner, MockAggregationRunner, MongoAggregationRunner};
pub use error::{Result, StoreError};
pub use pipelines::{MemoryPipelineStore, MongoPipelineStore, PipelineStore};
pub use types::PipelineDefinition;

// Re-export the BSON types that appear in the public API so downstream
// crates don't need their own driver dependency.
pub use mongodb::bson;
pub use mongodb::bson::Document;
