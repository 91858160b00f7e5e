//! Delivery workflows

use serde::{Serialize, Serializer};
use std::fmt;

/// Predefined sequence of SMS and TTS (text-to-speech) actions used to
/// convey the PIN to the user
///
/// Serialized as its numeric id, never its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Workflow {
    /// SMS, then two voice calls (the server default)
    #[default]
    SmsTtsTts,
    SmsSmsTts,
    TtsTts,
    SmsSms,
    SmsTts,
    Sms,
    Tts,
}

impl Workflow {
    /// All workflows in id order
    pub const ALL: [Workflow; 7] = [
        Workflow::SmsTtsTts,
        Workflow::SmsSmsTts,
        Workflow::TtsTts,
        Workflow::SmsSms,
        Workflow::SmsTts,
        Workflow::Sms,
        Workflow::Tts,
    ];

    /// Numeric id sent as `workflow_id`
    pub fn id(&self) -> u32 {
        match self {
            Workflow::SmsTtsTts => 1,
            Workflow::SmsSmsTts => 2,
            Workflow::TtsTts => 3,
            Workflow::SmsSms => 4,
            Workflow::SmsTts => 5,
            Workflow::Sms => 6,
            Workflow::Tts => 7,
        }
    }

    /// Look a workflow up by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|workflow| workflow.id() == id)
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Workflow::SmsTtsTts => "SMS_TTS_TTS",
            Workflow::SmsSmsTts => "SMS_SMS_TTS",
            Workflow::TtsTts => "TTS_TTS",
            Workflow::SmsSms => "SMS_SMS",
            Workflow::SmsTts => "SMS_TTS",
            Workflow::Sms => "SMS",
            Workflow::Tts => "TTS",
        };
        f.write_str(name)
    }
}

impl Serialize for Workflow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.id())
    }
}
