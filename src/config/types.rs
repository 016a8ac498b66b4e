use serde::{Deserialize, Serialize};

use crate::prompt::SummaryLength;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Wire format of the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Anthropic Messages API (`/v1/messages`).
    #[default]
    Anthropic,
    /// OpenAI-compatible Chat Completions API (`/v1/chat/completions`).
    #[serde(rename = "openai")]
    OpenAi,
}

impl Provider {
    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::Anthropic => "https://api.anthropic.com",
            Provider::OpenAi => "https://api.openai.com",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Anthropic => "claude-3-5-haiku-latest",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }

    pub fn default_key_env(self) -> &'static str {
        match self {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Anthropic => "Anthropic",
            Provider::OpenAi => "OpenAI",
        }
    }
}

/// Summarization endpoint settings.
///
/// Unset URL, model and key variable fall back to the provider defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Base URL for the API (e.g., "https://api.anthropic.com").
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier sent with every request.
    #[serde(default)]
    pub model: Option<String>,
    /// Upper bound on generated tokens (default: 1024).
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Total request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Length preselected on startup.
    #[serde(default)]
    pub default_length: SummaryLength,
    /// How long the "Copied" confirmation stays visible (default: 2000).
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    /// Redraw / animation tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_key_env())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            base_url: None,
            model: None,
            max_tokens: default_max_tokens(),
            timeout_seconds: None,
            api_key: None,
            api_key_env: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_length: SummaryLength::default(),
            copy_feedback_ms: default_copy_feedback_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
