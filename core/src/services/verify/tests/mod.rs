//! Tests for the Verify endpoints and client

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod endpoint_tests;
#[cfg(test)]
mod client_tests;
