//! HTTP transport for the Verify API
//!
//! Requests are sent as form-encoded POSTs with the account credentials
//! appended to the wire parameters.

mod reqwest_wrapper;

pub use reqwest_wrapper::ReqwestHttpWrapper;
