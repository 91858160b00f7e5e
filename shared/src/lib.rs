//! Shared utilities and common types for the Verify API client
//!
//! This crate provides functionality used by both the core and the
//! infrastructure crates:
//! - Configuration types (API credentials, HTTP settings, logging)
//! - The `Locale` value type sent as the `lg` wire parameter
//! - Phone number utilities (E.164 validation, masking for logs)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ClientConfig, Environment, HttpConfig, LogFormat, LoggingConfig};
pub use types::{Locale, ParseLocaleError};
pub use utils::phone;
