//! API credential and endpoint configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default base URI of the Verify REST API
pub const DEFAULT_BASE_URI: &str = "https://api.nexmo.com";

/// Credentials and base URI used to reach the Verify API
#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Account API key
    pub api_key: String,

    /// Account API secret
    pub api_secret: String,

    /// Base URI, without trailing slash
    #[serde(default = "default_base_uri")]
    pub base_uri: String,
}

impl ApiConfig {
    /// Create a configuration pointing at the default API host
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_uri: default_base_uri(),
        }
    }

    /// Point the client at a different host (sandbox, mock server, proxy)
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `VERIFY_API_KEY` and `VERIFY_API_SECRET` (required) and
    /// `VERIFY_BASE_URI` (optional).
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("VERIFY_API_KEY")
            .map_err(|_| "VERIFY_API_KEY not set".to_string())?;
        let api_secret = env::var("VERIFY_API_SECRET")
            .map_err(|_| "VERIFY_API_SECRET not set".to_string())?;

        let mut config = Self::new(api_key, api_secret);
        if let Ok(base_uri) = env::var("VERIFY_BASE_URI") {
            config = config.with_base_uri(base_uri);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that credentials are present and the base URI is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key must not be empty".to_string());
        }
        if self.api_secret.trim().is_empty() {
            return Err("API secret must not be empty".to_string());
        }
        if !(self.base_uri.starts_with("https://") || self.base_uri.starts_with("http://")) {
            return Err(format!(
                "Base URI must start with http:// or https://: {}",
                self.base_uri
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_uri", &self.base_uri)
            .finish()
    }
}

fn default_base_uri() -> String {
    String::from(DEFAULT_BASE_URI)
}
