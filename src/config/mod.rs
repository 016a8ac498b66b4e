mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, Provider, UiConfig};
