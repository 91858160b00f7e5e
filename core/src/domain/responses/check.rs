//! Response of the check operation

use serde::{Deserialize, Serialize};

use super::de::opt_decimal;
use super::status::VerifyStatus;

/// Result of checking a user-entered code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    pub status: VerifyStatus,

    /// Id of the verification event that was charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(default, deserialize_with = "opt_decimal", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl CheckResponse {
    /// Whether the code was accepted
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
