//! Configuration module
//!
//! This module organizes client configuration into logical areas:
//! - `api` - Credentials and base URI of the Verify API
//! - `http` - Timeouts and headers for the HTTP transport
//! - `environment` - Environment detection and logging configuration

pub mod api;
pub mod environment;
pub mod http;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::{ApiConfig, DEFAULT_BASE_URI};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use http::HttpConfig;

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// API credentials
    pub api: ApiConfig,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Create configuration for the given credentials with per-environment defaults
    pub fn new(environment: Environment, api: ApiConfig) -> Self {
        Self {
            environment,
            api,
            http: HttpConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Fails when the API credentials are missing or invalid.
    pub fn from_env() -> Result<Self, String> {
        let environment = Environment::from_env();
        let api = ApiConfig::from_env()?;

        Ok(Self {
            environment,
            api,
            http: HttpConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new_uses_environment_logging() {
        let config = ClientConfig::new(Environment::Production, ApiConfig::new("key", "secret"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.api.base_uri, DEFAULT_BASE_URI);
    }

    #[test]
    fn test_client_config_deserialize_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api": {"api_key": "key", "api_secret": "secret"}}"#,
        )
        .unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.api.base_uri, DEFAULT_BASE_URI);
        assert_eq!(config.logging.level, "info");
    }
}
