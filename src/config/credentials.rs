//! Credential resolution from configuration.
//!
//! The API key is resolved once at startup and handed to the summarizer
//! client, so nothing downstream reads the process environment.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, CredentialStatus::Configured(_))
    }
}

impl ApiConfig {
    /// Resolve the API key from config, then from the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using a custom variable lookup.
    ///
    /// `api_key` wins when non-empty; otherwise the variable named by
    /// `api_key_env` is consulted.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.to_string()));
            }
        }

        let var = self.api_key_env();
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(value.trim().to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("set api.api_key or the {} environment variable", var),
            },
        }
    }
}
