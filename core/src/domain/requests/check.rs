//! Code check request

use crate::domain::wire::{Operation, WireParams, WireRequest};

/// Confirm the code a user entered for a running verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    request_id: String,
    code: String,
    ip_address: Option<String>,
}

impl CheckRequest {
    /// # Arguments
    ///
    /// * `request_id` - Id returned by the verify call
    /// * `code` - Code entered by the user
    pub fn new(request_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            code: code.into(),
            ip_address: None,
        }
    }

    /// Attach the IP address the user entered the code from
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
}

impl WireRequest for CheckRequest {
    fn operation(&self) -> Operation {
        Operation::Check
    }

    fn to_wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.push("request_id", self.request_id.as_str());
        params.push("code", self.code.as_str());
        params.push_opt("ip_address", self.ip_address.clone());
        params
    }
}
