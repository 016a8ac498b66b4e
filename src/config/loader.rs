use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pastesum/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pastesum").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// A missing file is an error here: the caller asked for this file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is http(s)
    /// - Model name and key variable are not empty
    /// - Token limit and UI timings are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.model().trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.model must not be empty".to_string(),
            });
        }

        if self.api.api_key_env().trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.api_key_env must not be empty".to_string(),
            });
        }

        if self.api.max_tokens == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.max_tokens must be greater than zero".to_string(),
            });
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero when set".to_string(),
            });
        }

        if self.ui.copy_feedback_ms == 0 || self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.copy_feedback_ms and ui.tick_rate_ms must be greater than zero"
                    .to_string(),
            });
        }

        Ok(())
    }
}
