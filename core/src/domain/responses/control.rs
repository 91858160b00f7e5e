//! Response of the control operation

use serde::{Deserialize, Serialize};

use super::status::VerifyStatus;
use crate::domain::requests::VerifyControlCommand;

/// Result of cancelling or advancing a verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlResponse {
    pub status: VerifyStatus,

    /// Command that was carried out; absent on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<VerifyControlCommand>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl ControlResponse {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
