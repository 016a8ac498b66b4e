//! HTTP client for Anthropic- and OpenAI-compatible completion APIs.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::{ApiConfig, CredentialStatus, Provider};
use crate::prompt::{build_prompt, SummaryLength};

use super::error::SummarizeError;
use super::Summarizer;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for calling the summarization API.
///
/// The credential is resolved before construction and injected; a client
/// without one still builds and fails each call with
/// [`SummarizeError::NotConfigured`].
pub struct SummarizerClient {
    client: Client,
    provider: Provider,
    base_url: String,
    model: String,
    max_tokens: u32,
    credential: CredentialStatus,
}

impl SummarizerClient {
    pub fn new(api: &ApiConfig, credential: CredentialStatus) -> Result<Self, SummarizeError> {
        let mut builder = Client::builder();
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            provider: api.provider,
            base_url: api.base_url().to_string(),
            model: api.model().to_string(),
            max_tokens: api.max_tokens,
            credential,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_configured()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        match self.provider {
            Provider::Anthropic => format!("{}/v1/messages", self.base_url),
            Provider::OpenAi => format!("{}/v1/chat/completions", self.base_url),
        }
    }

    fn build_request(&self, prompt: String) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        }
    }

    fn authorize(&self, request: RequestBuilder, api_key: &str) -> RequestBuilder {
        match self.provider {
            Provider::Anthropic => request
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION),
            Provider::OpenAi => request.bearer_auth(api_key),
        }
    }

    /// Pull the completion text out of a success body.
    fn extract_text(&self, body: &str) -> Result<String, SummarizeError> {
        match self.provider {
            Provider::Anthropic => {
                let response: MessagesResponse = serde_json::from_str(body).map_err(|e| {
                    SummarizeError::ParseError(format!("Failed to parse response JSON: {}", e))
                })?;
                response
                    .content
                    .into_iter()
                    .find(|block| block.content_type == "text")
                    .and_then(|block| block.text)
                    .ok_or(SummarizeError::EmptyResponse)
            }
            Provider::OpenAi => {
                let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
                    SummarizeError::ParseError(format!("Failed to parse response JSON: {}", e))
                })?;
                response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or(SummarizeError::EmptyResponse)
            }
        }
    }
}

#[async_trait]
impl Summarizer for SummarizerClient {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, SummarizeError> {
        let api_key = match &self.credential {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(reason = %reason, "Summarization requested without API key");
                return Err(SummarizeError::NotConfigured {
                    reason: reason.clone(),
                });
            }
        };

        let request_body = self.build_request(build_prompt(text, length));
        let url = self.endpoint();

        tracing::debug!(
            url = %url,
            model = %self.model,
            length = %length,
            input_chars = text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .authorize(self.client.post(&url), api_key.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(SummarizeError::from_transport)?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Summarization API error"
            );

            let message = api_error_message(&error_text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(SummarizeError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(SummarizeError::from_transport)?;
        let summary = self.extract_text(&response_text)?;

        tracing::info!(
            latency_ms,
            summary_chars = summary.chars().count(),
            "Summarization succeeded"
        );

        Ok(summary)
    }
}

/// Best-effort human message from an error body.
///
/// Understands `{"error": {"message": ...}}` (both providers) and
/// `{"error": "..."}`; otherwise returns the trimmed raw body.
fn api_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let error = value.get("error");
        let nested = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str);
        let flat = error.and_then(Value::as_str);
        if let Some(message) = nested.or(flat) {
            return Some(message.to_string());
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Request body shared by both wire formats.
#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Anthropic Messages API response format.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

/// OpenAI Chat Completions response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
