//! Application state shared across handlers.

use std::sync::Arc;

use gamelens_llm::{SummaryCache, Summarizer};
use gamelens_store::{AggregationRunner, PipelineStore};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// All collaborators are injected explicitly so the routes can be
/// exercised with in-memory fakes for the store and the summarizer.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Pipeline-definition lookup.
    pub pipelines: Arc<dyn PipelineStore>,

    /// Aggregation execution against the data collection.
    pub runner: Arc<dyn AggregationRunner>,

    /// Summarization provider.
    pub summarizer: Arc<dyn Summarizer>,

    /// Prompt-keyed summary cache, sized from the configuration.
    pub summaries: Arc<SummaryCache>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: ServerConfig,
        pipelines: Arc<dyn PipelineStore>,
        runner: Arc<dyn AggregationRunner>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        let summaries = Arc::new(SummaryCache::with_capacity(config.summary_cache_capacity));
        Self {
            config: Arc::new(config),
            pipelines,
            runner,
            summarizer,
            summaries,
        }
    }
}
