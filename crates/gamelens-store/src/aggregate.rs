//! Aggregation execution against the game-records collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::Document;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Executes stored aggregation stages against the primary data collection.
///
/// An empty result set is a valid, successful outcome; `Err` is reserved
/// for execution failures (malformed stage, timeout, connectivity loss).
#[async_trait]
pub trait AggregationRunner: Send + Sync {
    /// Run the stages in order and collect the resulting records.
    async fn run(&self, stages: &[Document]) -> Result<Vec<Document>>;
}

/// Aggregation runner backed by a MongoDB collection.
pub struct MongoAggregationRunner {
    games: mongodb::Collection<Document>,
}

impl MongoAggregationRunner {
    /// Create a runner executing against the given collection.
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            games: db.collection(collection),
        }
    }
}

#[async_trait]
impl AggregationRunner for MongoAggregationRunner {
    async fn run(&self, stages: &[Document]) -> Result<Vec<Document>> {
        let cursor = self.games.aggregate(stages.to_vec()).await?;
        let records: Vec<Document> = cursor.try_collect().await?;
        debug!(
            stages = stages.len(),
            records = records.len(),
            "Aggregation executed"
        );
        Ok(records)
    }
}

/// A scripted aggregation runner for tests.
///
/// Returns queued results in order and records the stages of every
/// invocation. Once the queue is exhausted further runs fail, which makes
/// unexpected extra executions visible in tests.
#[derive(Debug, Default)]
pub struct MockAggregationRunner {
    results: std::sync::Mutex<Vec<std::result::Result<Vec<Document>, String>>>,
    calls: std::sync::Mutex<Vec<Vec<Document>>>,
}

impl MockAggregationRunner {
    /// Create a runner with the given result queue.
    pub fn new(results: Vec<std::result::Result<Vec<Document>, String>>) -> Self {
        Self {
            results: std::sync::Mutex::new(results),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Create a runner that returns one successful result.
    pub fn with_records(records: Vec<Document>) -> Self {
        Self::new(vec![Ok(records)])
    }

    /// Create a runner whose next run fails with the given cause.
    pub fn with_error(cause: impl Into<String>) -> Self {
        Self::new(vec![Err(cause.into())])
    }

    /// The stages of every run so far.
    pub fn calls(&self) -> Vec<Vec<Document>> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `run` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AggregationRunner for MockAggregationRunner {
    async fn run(&self, stages: &[Document]) -> Result<Vec<Document>> {
        self.calls.lock().unwrap().push(stages.to_vec());

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Err(StoreError::Other(
                "MockAggregationRunner: no more results queued".to_string(),
            ));
        }
        results.remove(0).map_err(StoreError::Other)
    }
}
