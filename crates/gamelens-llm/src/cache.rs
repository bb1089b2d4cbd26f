//! Bounded summary cache with LRU eviction.
//!
//! Memoizes summarization calls by exact prompt text so repeated requests
//! for the same pipeline over unchanged data don't re-charge the external
//! provider. Capacity is fixed; inserting past it evicts the
//! least-recently-used prompt.
//!
//! Concurrency policy: the lock is not held across the provider call, so
//! two concurrent misses on the same prompt may both compute (last insert
//! wins). Values are only ever inserted complete, and a failed computation
//! is never inserted, so the next call with the same prompt retries.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::{debug, info, trace};

use crate::error::Result;

/// Default maximum number of distinct prompts to keep.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Prompt-keyed LRU cache of provider summaries.
pub struct SummaryCache {
    inner: Mutex<LruCache<String, String>>,
}

impl SummaryCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` distinct prompts.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap =
            NonZeroUsize::new(capacity).unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Get the current number of cached summaries.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Check if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Check if a prompt is cached, without refreshing its recency.
    pub async fn contains(&self, prompt: &str) -> bool {
        self.inner.lock().await.peek(prompt).is_some()
    }

    /// Return the cached summary for `prompt`, or run `compute` and cache
    /// its result.
    ///
    /// A hit refreshes the prompt's recency. `compute` failures propagate
    /// to the caller uncached.
    pub async fn get_or_compute<F, Fut>(&self, prompt: &str, compute: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        {
            let mut lru = self.inner.lock().await;
            if let Some(summary) = lru.get(prompt) {
                trace!(prompt_len = prompt.len(), "Summary cache hit");
                return Ok(summary.clone());
            }
        }

        info!(prompt_len = prompt.len(), "Summary cache miss, calling provider");
        let summary = compute().await?;

        let mut lru = self.inner.lock().await;
        if lru.len() == lru.cap().get() && lru.peek(prompt).is_none() {
            if let Some((evicted, _)) = lru.peek_lru() {
                debug!(
                    prompt_len = evicted.len(),
                    "Evicting least recently used summary to make room"
                );
            }
        }
        lru.put(prompt.to_string(), summary.clone());

        Ok(summary)
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}
