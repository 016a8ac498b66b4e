//! Summarization client.
//!
//! [`Summarizer`] is the seam the UI talks to; [`SummarizerClient`] is the
//! HTTP implementation.

mod client;
mod error;

use async_trait::async_trait;

use crate::prompt::SummaryLength;

pub use client::SummarizerClient;
pub use error::{SummarizeError, FAILURE_PREFIX, UNKNOWN_ERROR_MESSAGE};

/// Produces an abstractive summary of a piece of text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`, targeting the given length.
    ///
    /// On success the model output is returned unmodified.
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, SummarizeError>;
}
