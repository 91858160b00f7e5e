//! # Verify Core
//!
//! Request/response model and client logic for the Verify API.
//! This crate contains the typed requests and responses, the wire encoding,
//! the endpoint wrappers and the [`VerifyClient`] facade. The HTTP transport
//! is injected through the [`HttpWrapper`] trait and lives in `verify_infra`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
