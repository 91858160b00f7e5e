//! # Infrastructure Layer
//!
//! This crate provides the concrete pieces the Verify client needs at runtime:
//! - **HTTP**: [`ReqwestHttpWrapper`], the `reqwest` implementation of
//!   `verify_core::HttpWrapper`
//! - **Configuration**: loading `.env` files and building a `ClientConfig`
//! - **Logging**: installing a `tracing` subscriber from `LoggingConfig`

use std::sync::Arc;

use verify_core::VerifyClient;
use verify_shared::{ClientConfig, Environment};

// Re-export core types for convenience
pub use verify_core::errors::*;

/// HTTP transport module
pub mod http;

/// Tracing subscriber setup
pub mod logging;

pub use http::ReqwestHttpWrapper;

/// Load configuration and build a ready-to-use client
///
/// This function:
/// - Loads `.env` files and reads the configuration from the environment
/// - Installs the tracing subscriber
/// - Builds the HTTP transport and the client
pub fn initialize() -> Result<VerifyClient<ReqwestHttpWrapper>, InfrastructureError> {
    let config = load_config()?;
    logging::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        base_uri = %config.api.base_uri,
        "Initializing Verify client"
    );

    build_client(&config)
}

/// Build a client from an explicit configuration
pub fn build_client(
    config: &ClientConfig,
) -> Result<VerifyClient<ReqwestHttpWrapper>, InfrastructureError> {
    let http = ReqwestHttpWrapper::from_config(config)?;
    Ok(VerifyClient::new(Arc::new(http)))
}

/// Load client configuration from the environment
///
/// `.env` is loaded first, then `.env.<environment>` fills in any keys that
/// are still unset. Variables already present in the process environment
/// always win.
pub fn load_config() -> Result<ClientConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();

    ClientConfig::from_env().map_err(InfrastructureError::Config)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Failure while building the HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid log filter directive
    #[error("Logging error: {0}")]
    Logging(String),
}
