//! One wrapper per remote Verify operation
//!
//! Each endpoint encodes its request, submits it through the shared
//! [`HttpWrapper`] and maps the JSON payload onto the typed response.
//! Nothing is retried: collaborator errors propagate unchanged.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use verify_shared::phone::mask_phone_number;

use crate::domain::requests::{CheckRequest, ControlRequest, Psd2Request, SearchRequest, VerifyRequest};
use crate::domain::responses::{
    CheckResponse, ControlResponse, SearchVerifyResponse, VerifyResponse, VerifyStatus,
};
use crate::domain::wire::WireRequest;
use crate::errors::{VerifyError, VerifyResult};

use super::traits::HttpWrapper;

/// Submit a request and decode the payload into `T`
async fn submit<W, R, T>(http: &W, request: &R) -> VerifyResult<T>
where
    W: HttpWrapper + ?Sized,
    R: WireRequest,
    T: DeserializeOwned,
{
    let api_request = request.to_api_request();
    let operation = api_request.operation;

    let payload = http.execute(api_request).await?;

    serde_json::from_value(payload).map_err(|source| {
        tracing::warn!(
            operation = %operation,
            error = %source,
            "Response payload does not match the expected shape"
        );
        VerifyError::response_parse(operation, source)
    })
}

fn log_status(operation: &str, status: VerifyStatus, error_text: Option<&str>) {
    if status.is_ok() {
        tracing::debug!(operation = operation, status = %status, "Verify API call succeeded");
    } else {
        tracing::debug!(
            operation = operation,
            status = %status,
            error_text = error_text.unwrap_or_default(),
            "Verify API returned a non-zero status"
        );
    }
}

/// Starts standard verifications (`/verify/json`)
pub struct VerifyEndpoint<W: HttpWrapper + ?Sized> {
    http: Arc<W>,
}

impl<W: HttpWrapper + ?Sized> VerifyEndpoint<W> {
    pub fn new(http: Arc<W>) -> Self {
        Self { http }
    }

    /// Send a verification request
    ///
    /// # Arguments
    ///
    /// * `request` - The verification to start
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyResponse)` - The server's answer, which may carry a non-zero status
    /// * `Err(VerifyError)` - If the call failed or the payload could not be parsed
    pub async fn execute(&self, request: &VerifyRequest) -> VerifyResult<VerifyResponse> {
        tracing::debug!(
            operation = "verify",
            number = %mask_phone_number(request.number()),
            workflow = ?request.workflow().map(|w| w.id()),
            "Starting verification"
        );

        let response: VerifyResponse = submit(self.http.as_ref(), request).await?;
        log_status("verify", response.status, response.error_text.as_deref());
        Ok(response)
    }
}

/// Starts PSD2 payment-confirmation verifications (`/verify/psd2/json`)
pub struct Psd2Endpoint<W: HttpWrapper + ?Sized> {
    http: Arc<W>,
}

impl<W: HttpWrapper + ?Sized> Psd2Endpoint<W> {
    pub fn new(http: Arc<W>) -> Self {
        Self { http }
    }

    /// Send a PSD2 verification request
    pub async fn execute(&self, request: &Psd2Request) -> VerifyResult<VerifyResponse> {
        tracing::debug!(
            operation = "psd2",
            number = %mask_phone_number(request.number()),
            amount = request.amount(),
            workflow = ?request.workflow().map(|w| w.id()),
            "Starting PSD2 verification"
        );

        let response: VerifyResponse = submit(self.http.as_ref(), request).await?;
        log_status("psd2", response.status, response.error_text.as_deref());
        Ok(response)
    }
}

/// Checks user-entered codes (`/verify/check/json`)
pub struct CheckEndpoint<W: HttpWrapper + ?Sized> {
    http: Arc<W>,
}

impl<W: HttpWrapper + ?Sized> CheckEndpoint<W> {
    pub fn new(http: Arc<W>) -> Self {
        Self { http }
    }

    pub async fn execute(&self, request: &CheckRequest) -> VerifyResult<CheckResponse> {
        tracing::debug!(operation = "check", request_id = request.request_id(), "Checking code");

        let response: CheckResponse = submit(self.http.as_ref(), request).await?;
        log_status("check", response.status, response.error_text.as_deref());
        Ok(response)
    }
}

/// Looks up verification requests (`/verify/search/json`)
pub struct SearchEndpoint<W: HttpWrapper + ?Sized> {
    http: Arc<W>,
}

impl<W: HttpWrapper + ?Sized> SearchEndpoint<W> {
    pub fn new(http: Arc<W>) -> Self {
        Self { http }
    }

    pub async fn execute(&self, request: &SearchRequest) -> VerifyResult<SearchVerifyResponse> {
        tracing::debug!(
            operation = "search",
            request_ids = request.request_ids().len(),
            "Searching verifications"
        );

        let response: SearchVerifyResponse = submit(self.http.as_ref(), request).await?;
        log_status("search", response.status, response.error_text.as_deref());
        Ok(response)
    }
}

/// Cancels or advances running verifications (`/verify/control/json`)
pub struct ControlEndpoint<W: HttpWrapper + ?Sized> {
    http: Arc<W>,
}

impl<W: HttpWrapper + ?Sized> ControlEndpoint<W> {
    pub fn new(http: Arc<W>) -> Self {
        Self { http }
    }

    pub async fn execute(&self, request: &ControlRequest) -> VerifyResult<ControlResponse> {
        tracing::debug!(
            operation = "control",
            request_id = request.request_id(),
            command = %request.command(),
            "Sending control command"
        );

        let response: ControlResponse = submit(self.http.as_ref(), request).await?;
        log_status("control", response.status, response.error_text.as_deref());
        Ok(response)
    }
}
