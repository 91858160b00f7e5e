//! Services that submit requests to the Verify API.

pub mod verify;

// Re-export commonly used types
pub use verify::{
    CheckEndpoint, ControlEndpoint, HttpWrapper, Psd2Endpoint, SearchEndpoint, VerifyClient,
    VerifyEndpoint,
};
