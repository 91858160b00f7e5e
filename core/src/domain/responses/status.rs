//! Numeric status codes returned by the Verify API

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Outcome of a Verify API call
///
/// A non-`Ok` status is a normal response, not a transport failure: callers
/// inspect it alongside `error_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyStatus {
    Ok,
    Throttled,
    MissingParams,
    InvalidParams,
    InvalidCredentials,
    InternalError,
    InvalidRequest,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaExceeded,
    AlreadyRequested,
    UnsupportedNetwork,
    InvalidCode,
    WrongCodeThrottled,
    TooManyDestinations,
    CommandNotPermitted,
    CommsFailure,
    /// A code this client does not know about
    Unknown(i64),
}

impl VerifyStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VerifyStatus::Ok,
            1 => VerifyStatus::Throttled,
            2 => VerifyStatus::MissingParams,
            3 => VerifyStatus::InvalidParams,
            4 => VerifyStatus::InvalidCredentials,
            5 => VerifyStatus::InternalError,
            6 => VerifyStatus::InvalidRequest,
            7 => VerifyStatus::NumberBarred,
            8 => VerifyStatus::PartnerAccountBarred,
            9 => VerifyStatus::PartnerQuotaExceeded,
            10 => VerifyStatus::AlreadyRequested,
            15 => VerifyStatus::UnsupportedNetwork,
            16 => VerifyStatus::InvalidCode,
            17 => VerifyStatus::WrongCodeThrottled,
            18 => VerifyStatus::TooManyDestinations,
            19 => VerifyStatus::CommandNotPermitted,
            101 => VerifyStatus::CommsFailure,
            other => VerifyStatus::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            VerifyStatus::Ok => 0,
            VerifyStatus::Throttled => 1,
            VerifyStatus::MissingParams => 2,
            VerifyStatus::InvalidParams => 3,
            VerifyStatus::InvalidCredentials => 4,
            VerifyStatus::InternalError => 5,
            VerifyStatus::InvalidRequest => 6,
            VerifyStatus::NumberBarred => 7,
            VerifyStatus::PartnerAccountBarred => 8,
            VerifyStatus::PartnerQuotaExceeded => 9,
            VerifyStatus::AlreadyRequested => 10,
            VerifyStatus::UnsupportedNetwork => 15,
            VerifyStatus::InvalidCode => 16,
            VerifyStatus::WrongCodeThrottled => 17,
            VerifyStatus::TooManyDestinations => 18,
            VerifyStatus::CommandNotPermitted => 19,
            VerifyStatus::CommsFailure => 101,
            VerifyStatus::Unknown(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, VerifyStatus::Ok)
    }
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyStatus::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => write!(f, "{:?}({})", other, other.code()),
        }
    }
}

impl Serialize for VerifyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Code(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for VerifyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = match RawStatus::deserialize(deserializer)? {
            RawStatus::Code(code) => code,
            RawStatus::Text(text) => text.trim().parse::<i64>().map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&text), &"a numeric status code")
            })?,
        };
        Ok(VerifyStatus::from_code(code))
    }
}
