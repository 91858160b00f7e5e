//! HTTP transport settings

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Settings applied to the HTTP client that talks to the Verify API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of body bytes kept in error messages
    #[serde(default = "default_max_error_body_bytes")]
    pub max_error_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            max_error_body_bytes: default_max_error_body_bytes(),
        }
    }
}

impl HttpConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("VERIFY_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: env::var("VERIFY_HTTP_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            user_agent: env::var("VERIFY_HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
            max_error_body_bytes: defaults.max_error_body_bytes,
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("verify-rust/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_error_body_bytes() -> usize {
    1024
}
