//! Trait for HTTP transport integration

use async_trait::async_trait;

use crate::domain::wire::ApiRequest;
use crate::errors::VerifyResult;

/// Transport used to submit requests to the Verify API
///
/// Implementations add credentials, POST the wire parameters to
/// `operation.path()` and hand back the decoded JSON body. Transport
/// failures and non-success HTTP statuses are reported as
/// `VerifyError::Client`.
#[async_trait]
pub trait HttpWrapper: Send + Sync {
    /// Submit a request and return the JSON payload of the response
    async fn execute(&self, request: ApiRequest) -> VerifyResult<serde_json::Value>;
}

