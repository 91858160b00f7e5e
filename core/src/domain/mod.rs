//! Domain layer: typed requests, typed responses and their wire form.

pub mod requests;
pub mod responses;
pub mod wire;

// Re-export commonly used domain types
pub use requests::*;
pub use responses::*;
pub use wire::{ApiRequest, Operation, WireParams, WireRequest, WireValue};
