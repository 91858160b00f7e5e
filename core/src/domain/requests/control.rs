//! Verification control request

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::wire::{Operation, WireParams, WireRequest};

/// Commands accepted by the control operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyControlCommand {
    /// Stop the verification
    Cancel,
    /// Skip to the next delivery attempt of the workflow
    TriggerNextEvent,
}

impl VerifyControlCommand {
    /// Value sent as the `cmd` parameter
    pub fn as_wire(&self) -> &'static str {
        match self {
            VerifyControlCommand::Cancel => "cancel",
            VerifyControlCommand::TriggerNextEvent => "trigger_next_event",
        }
    }
}

impl fmt::Display for VerifyControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Cancel or advance a running verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRequest {
    request_id: String,
    command: VerifyControlCommand,
}

impl ControlRequest {
    pub fn new(request_id: impl Into<String>, command: VerifyControlCommand) -> Self {
        Self {
            request_id: request_id.into(),
            command,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn command(&self) -> VerifyControlCommand {
        self.command
    }
}

impl WireRequest for ControlRequest {
    fn operation(&self) -> Operation {
        Operation::Control
    }

    fn to_wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        params.push("request_id", self.request_id.as_str());
        params.push("cmd", self.command.as_wire());
        params
    }
}
