//! Typed requests for every Verify operation
//!
//! `BaseRequest` carries the fields shared by standard and PSD2 verifications
//! and is embedded by value in [`VerifyRequest`] and [`Psd2Request`].

mod base;
mod check;
mod control;
mod psd2;
mod search;
mod verify;
mod workflow;

#[cfg(test)]
mod tests;

pub use base::{code_length_from_sentinel, BaseRequest};
pub use check::CheckRequest;
pub use control::{ControlRequest, VerifyControlCommand};
pub use psd2::Psd2Request;
pub use search::SearchRequest;
pub use verify::{LineType, VerifyOptions, VerifyRequest};
pub use workflow::Workflow;
