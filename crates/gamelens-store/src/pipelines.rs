//! Pipeline-definition lookup.

use async_trait::async_trait;
use mongodb::Database;
use mongodb::bson::{Bson, doc};
use tracing::debug;

use crate::error::Result;
use crate::types::PipelineDefinition;

/// Read access to the stored pipeline definitions.
///
/// Implementations never translate "no match" into an error: a missing
/// pipeline is `Ok(None)` and an `Err` always means the store itself
/// failed.
#[async_trait]
pub trait PipelineStore: Send + Sync {
    /// All distinct pipeline names, in store-native order.
    async fn list_pipeline_names(&self) -> Result<Vec<String>>;

    /// Exact-match lookup by name.
    async fn find_pipeline(&self, name: &str) -> Result<Option<PipelineDefinition>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// MongoDB implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Pipeline store backed by a MongoDB collection.
pub struct MongoPipelineStore {
    pipelines: mongodb::Collection<PipelineDefinition>,
}

impl MongoPipelineStore {
    /// Create a store reading from the given collection.
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            pipelines: db.collection(collection),
        }
    }
}

#[async_trait]
impl PipelineStore for MongoPipelineStore {
    async fn list_pipeline_names(&self) -> Result<Vec<String>> {
        let values = self.pipelines.distinct("name", doc! {}).await?;

        // `distinct` is untyped; anything that isn't a string is not a
        // usable pipeline name.
        let names: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(name) => Some(name),
                _ => None,
            })
            .collect();

        debug!(count = names.len(), "Listed pipeline names");
        Ok(names)
    }

    async fn find_pipeline(&self, name: &str) -> Result<Option<PipelineDefinition>> {
        let definition = self.pipelines.find_one(doc! { "name": name }).await?;
        debug!(pipeline = name, found = definition.is_some(), "Pipeline lookup");
        Ok(definition)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory fake
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory pipeline store for tests.
///
/// Preserves insertion order and mirrors the first-match-wins lookup
/// semantics of the real store.
#[derive(Debug, Default)]
pub struct MemoryPipelineStore {
    pipelines: Vec<PipelineDefinition>,
}

impl MemoryPipelineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given definitions.
    pub fn with_pipelines(pipelines: Vec<PipelineDefinition>) -> Self {
        Self { pipelines }
    }
}

#[async_trait]
impl PipelineStore for MemoryPipelineStore {
    async fn list_pipeline_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for definition in &self.pipelines {
            if !names.iter().any(|name| name == &definition.name) {
                names.push(definition.name.clone());
            }
        }
        Ok(names)
    }

    async fn find_pipeline(&self, name: &str) -> Result<Option<PipelineDefinition>> {
        Ok(self
            .pipelines
            .iter()
            .find(|definition| definition.name == name)
            .cloned())
    }
}
