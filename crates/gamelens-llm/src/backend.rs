//! Summarizer trait and mock implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{LlmError, Result};

/// Trait for summarization providers.
///
/// One call, one prompt, one block of free text. Caching and error
/// translation live elsewhere; implementations only talk to the provider.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a natural-language summary for the given prompt.
    async fn summarize(&self, prompt: &str) -> Result<String>;

    /// Get the name of this provider.
    fn name(&self) -> &str;
}

/// A summarizer that can be shared across threads.
pub type SharedSummarizer = Arc<dyn Summarizer>;

// ─────────────────────────────────────────────────────────────────────────────
// Mock Summarizer
// ─────────────────────────────────────────────────────────────────────────────

/// A mock summarizer for testing purposes.
///
/// Returns pre-configured responses in order and records every prompt it
/// was asked to summarize, so tests can count provider invocations and
/// assert on the exact prompt text.
#[derive(Debug)]
pub struct MockSummarizer {
    name: String,
    responses: std::sync::Mutex<Vec<std::result::Result<String, String>>>,
    prompt_log: std::sync::Mutex<Vec<String>>,
}

impl MockSummarizer {
    /// Create a mock with the given response queue. `Err` entries become
    /// backend errors carrying the message.
    pub fn new(responses: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            name: "mock".to_string(),
            responses: std::sync::Mutex::new(responses),
            prompt_log: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Create a mock with a single successful response.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Create a mock whose next call fails with the given cause.
    pub fn with_error(cause: impl Into<String>) -> Self {
        Self::new(vec![Err(cause.into())])
    }

    /// All prompts that were summarized so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompt_log.lock().unwrap().clone()
    }

    /// How many times the provider was invoked.
    pub fn call_count(&self) -> usize {
        self.prompt_log.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.prompt_log.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(LlmError::Backend(
                "MockSummarizer: no more responses available".to_string(),
            ));
        }
        responses.remove(0).map_err(LlmError::Backend)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
