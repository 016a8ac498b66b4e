//! Error types for summarization requests.

use thiserror::Error;

/// Prefix of every user-facing failure message.
pub const FAILURE_PREFIX: &str = "Failed to generate summary. Error: ";

/// Shown when the request task died without producing a typed error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while generating the summary.";

/// Errors that can occur while calling the summarization API.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No API key was resolved at startup
    #[error("API key is not configured ({reason})")]
    NotConfigured { reason: String },

    /// The request exceeded the configured timeout
    #[error("timeout")]
    Timeout,

    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The success body could not be decoded
    #[error("invalid response: {0}")]
    ParseError(String),

    /// The response decoded but carried no text
    #[error("the model returned an empty response")]
    EmptyResponse,
}

impl SummarizeError {
    /// Map a reqwest failure, pulling timeouts out as their own variant.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SummarizeError::Timeout
        } else {
            SummarizeError::Http(err)
        }
    }

    /// Message for the error banner.
    pub fn user_message(&self) -> String {
        format!("{}{}", FAILURE_PREFIX, self)
    }
}
