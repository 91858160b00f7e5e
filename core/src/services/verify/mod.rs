//! Verify API client
//!
//! This module provides:
//! - The [`HttpWrapper`] seam through which every request is submitted
//! - One endpoint wrapper per remote operation
//! - The [`VerifyClient`] facade with convenience methods for common flows

mod client;
mod endpoints;
mod traits;

#[cfg(test)]
mod tests;

pub use client::VerifyClient;
pub use endpoints::{CheckEndpoint, ControlEndpoint, Psd2Endpoint, SearchEndpoint, VerifyEndpoint};
pub use traits::HttpWrapper;
