//! Response of the verify and PSD2 operations

use serde::{Deserialize, Serialize};

use super::status::VerifyStatus;

/// Result of starting a verification (standard or PSD2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Id used for later check, search and control calls; empty on failure
    #[serde(default)]
    pub request_id: String,

    pub status: VerifyStatus,

    /// Explanation when `status` is not OK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,

    /// Network the number belongs to, reported for some failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl VerifyResponse {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
