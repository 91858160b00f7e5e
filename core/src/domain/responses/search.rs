//! Response of the search operation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de::{opt_datetime, opt_decimal, serialize_opt_datetime};
use super::status::VerifyStatus;

/// Lifecycle state of a verification found by search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerifyDetailsStatus {
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "EXPIRED")]
    Expired,
    #[serde(rename = "CANCELLED")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Outcome of a single code check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerifyCheckStatus {
    #[serde(rename = "VALID")]
    Valid,
    #[serde(rename = "INVALID")]
    Invalid,
    #[serde(other)]
    Unknown,
}

/// One code check made against a verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyCheck {
    #[serde(
        default,
        deserialize_with = "opt_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub date_received: Option<NaiveDateTime>,

    #[serde(default)]
    pub code: Option<String>,

    pub status: VerifyCheckStatus,

    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Details of one verification request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyDetails {
    pub request_id: String,

    #[serde(default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub sender_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "opt_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub date_submitted: Option<NaiveDateTime>,

    #[serde(
        default,
        deserialize_with = "opt_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub date_finalized: Option<NaiveDateTime>,

    #[serde(
        default,
        deserialize_with = "opt_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub first_event_date: Option<NaiveDateTime>,

    #[serde(
        default,
        deserialize_with = "opt_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub last_event_date: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub price: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,

    pub status: VerifyDetailsStatus,

    #[serde(default)]
    pub checks: Vec<VerifyCheck>,
}

/// Result of a search
///
/// The server answers with one of three shapes: a single details object,
/// a `verification_requests` list, or an error object carrying a numeric
/// status and an optional `error_text`. All three are folded into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSearchResponse")]
pub struct SearchVerifyResponse {
    /// `Ok` whenever records were returned
    pub status: VerifyStatus,

    pub error_text: Option<String>,

    /// Records found, in server order; empty on error
    pub verification_requests: Vec<VerifyDetails>,
}

impl SearchVerifyResponse {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The first (or only) record found
    pub fn first(&self) -> Option<&VerifyDetails> {
        self.verification_requests.first()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSearchResponse {
    Many {
        verification_requests: Vec<VerifyDetails>,
    },
    // Must stay ahead of `Single`: a numeric status never matches a details status
    Error {
        status: VerifyStatus,
        #[serde(default)]
        error_text: Option<String>,
    },
    Single(Box<VerifyDetails>),
}

impl From<RawSearchResponse> for SearchVerifyResponse {
    fn from(raw: RawSearchResponse) -> Self {
        match raw {
            RawSearchResponse::Many {
                verification_requests,
            } => Self {
                status: VerifyStatus::Ok,
                error_text: None,
                verification_requests,
            },
            RawSearchResponse::Error { status, error_text } => Self {
                status,
                error_text,
                verification_requests: Vec::new(),
            },
            RawSearchResponse::Single(details) => Self {
                status: VerifyStatus::Ok,
                error_text: None,
                verification_requests: vec![*details],
            },
        }
    }
}
