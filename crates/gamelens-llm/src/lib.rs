//! Summarization client for GameLens.
//!
//! The core abstraction is the [`Summarizer`] trait: one blocking call
//! that turns a prompt into free text. The production implementation is
//! [`GeminiBackend`], which talks to Google's Generative Language API;
//! tests use [`MockSummarizer`].
//!
//! Summaries are memoized by exact prompt text in [`SummaryCache`], a
//! bounded LRU that keeps repeated dashboard refreshes from re-charging
//! the provider.

pub mod backend;
pub mod cache;
pub mod error;
pub mod gemini;

pub use backend::{MockSummarizer, SharedSummarizer, Summarizer};
pub use cache::{DEFAULT_CACHE_CAPACITY, SummaryCache};
pub use error::{LlmError, Result};
pub use gemini::{DEFAULT_MODEL, GeminiBackend, GeminiConfig};
