//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;
use verify_shared::{LogFormat, LoggingConfig};

use crate::InfrastructureError;

/// Install a global `tracing` subscriber
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }

    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, InfrastructureError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| InfrastructureError::Logging(format!("invalid log level '{}': {}", config.level, e)))
}
