//! Typed responses returned by the Verify operations
//!
//! Field names mirror the JSON payloads exactly. Numeric fields that the
//! server sometimes sends as strings (`status`, `price`) accept both forms.

mod check;
mod control;
mod de;
mod search;
mod status;
mod verify;

#[cfg(test)]
mod tests;

pub use check::CheckResponse;
pub use control::ControlResponse;
pub use search::{SearchVerifyResponse, VerifyCheck, VerifyCheckStatus, VerifyDetails, VerifyDetailsStatus};
pub use status::VerifyStatus;
pub use verify::VerifyResponse;
