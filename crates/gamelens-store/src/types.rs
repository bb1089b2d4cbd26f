//! Stored document shapes.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A named, precomputed aggregation pipeline as stored in the pipelines
/// collection.
///
/// Definitions are created and edited out of band; this system only reads
/// them. The `name` field uniquely identifies a definition at lookup time
/// (first match wins if the collection holds duplicates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// Unique lookup key.
    pub name: String,

    /// Optional human-readable summary of what the pipeline computes,
    /// spliced into the summarization prompt.
    #[serde(default)]
    pub description: Option<String>,

    /// Ordered aggregation stages. Stage semantics are owned by the
    /// MongoDB query language; this system treats them as opaque.
    pub pipeline: Vec<Document>,
}

impl PipelineDefinition {
    /// The description, or the empty string when none is stored.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
