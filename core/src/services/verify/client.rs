//! Facade over the Verify endpoints

use std::sync::Arc;
use verify_shared::Locale;

use crate::domain::requests::{
    CheckRequest, ControlRequest, Psd2Request, SearchRequest, VerifyControlCommand,
    VerifyOptions, VerifyRequest, Workflow,
};
use crate::domain::responses::{CheckResponse, ControlResponse, SearchVerifyResponse, VerifyResponse};
use crate::errors::VerifyResult;

use super::endpoints::{CheckEndpoint, ControlEndpoint, Psd2Endpoint, SearchEndpoint, VerifyEndpoint};
use super::traits::HttpWrapper;

/// Client for the Verify API
///
/// Every method builds a request, forwards it to the matching endpoint and
/// returns the endpoint's result unchanged. All endpoints share one
/// [`HttpWrapper`].
pub struct VerifyClient<W: HttpWrapper + ?Sized> {
    verify: VerifyEndpoint<W>,
    psd2: Psd2Endpoint<W>,
    check: CheckEndpoint<W>,
    search: SearchEndpoint<W>,
    control: ControlEndpoint<W>,
}

impl<W: HttpWrapper + ?Sized> VerifyClient<W> {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `http` - Transport shared by every endpoint
    pub fn new(http: Arc<W>) -> Self {
        Self {
            verify: VerifyEndpoint::new(http.clone()),
            psd2: Psd2Endpoint::new(http.clone()),
            check: CheckEndpoint::new(http.clone()),
            search: SearchEndpoint::new(http.clone()),
            control: ControlEndpoint::new(http),
        }
    }

    /// Start a verification with every optional field left to the server
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `brand` - Company or app name shown in the message
    pub async fn verify(&self, number: &str, brand: &str) -> VerifyResult<VerifyResponse> {
        self.verify_request(&VerifyRequest::new(number, brand)).await
    }

    /// Start a verification with a custom sender id
    pub async fn verify_from(
        &self,
        number: &str,
        brand: &str,
        from: &str,
    ) -> VerifyResult<VerifyResponse> {
        self.verify_request(&VerifyRequest::with_from(number, brand, from))
            .await
    }

    /// Start a verification with sender id, code length and locale
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `brand` - Company or app name shown in the message
    /// * `from` - Sender id, or `None` for the server default
    /// * `length` - Code length (4 or 6); any negative value means server default
    /// * `locale` - Message language, or `None` for the server default
    pub async fn verify_with_length(
        &self,
        number: &str,
        brand: &str,
        from: Option<&str>,
        length: i32,
        locale: Option<Locale>,
    ) -> VerifyResult<VerifyResponse> {
        let options = VerifyOptions {
            from: from.map(str::to_string),
            locale,
            ..VerifyOptions::default()
        }
        .length(length);

        self.verify_with_options(number, brand, options).await
    }

    pub async fn verify_with_options(
        &self,
        number: &str,
        brand: &str,
        options: VerifyOptions,
    ) -> VerifyResult<VerifyResponse> {
        self.verify_request(&VerifyRequest::with_options(number, brand, options))
            .await
    }

    /// Send a fully built verification request
    pub async fn verify_request(&self, request: &VerifyRequest) -> VerifyResult<VerifyResponse> {
        self.verify.execute(request).await
    }

    /// Check the code the user entered
    pub async fn check(&self, request_id: &str, code: &str) -> VerifyResult<CheckResponse> {
        self.check_request(&CheckRequest::new(request_id, code)).await
    }

    /// Check a code, passing the end user's IP address along
    pub async fn check_with_ip(
        &self,
        request_id: &str,
        code: &str,
        ip_address: &str,
    ) -> VerifyResult<CheckResponse> {
        self.check_request(&CheckRequest::new(request_id, code).with_ip_address(ip_address))
            .await
    }

    pub async fn check_request(&self, request: &CheckRequest) -> VerifyResult<CheckResponse> {
        self.check.execute(request).await
    }

    /// Look up a single verification
    pub async fn search(&self, request_id: &str) -> VerifyResult<SearchVerifyResponse> {
        self.search.execute(&SearchRequest::new(request_id)).await
    }

    /// Look up several verifications in one call
    pub async fn search_many<I, S>(&self, request_ids: I) -> VerifyResult<SearchVerifyResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search.execute(&SearchRequest::many(request_ids)).await
    }

    /// Skip to the next delivery event of the workflow
    pub async fn advance_verification(&self, request_id: &str) -> VerifyResult<ControlResponse> {
        self.control(&ControlRequest::new(request_id, VerifyControlCommand::TriggerNextEvent))
            .await
    }

    /// Cancel a running verification
    pub async fn cancel_verification(&self, request_id: &str) -> VerifyResult<ControlResponse> {
        self.control(&ControlRequest::new(request_id, VerifyControlCommand::Cancel))
            .await
    }

    pub async fn control(&self, request: &ControlRequest) -> VerifyResult<ControlResponse> {
        self.control.execute(request).await
    }

    /// Start a PSD2 verification for a payment
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `amount` - Payment amount in euros
    /// * `payee` - Merchant the payment is made to
    pub async fn psd2_verify(
        &self,
        number: &str,
        amount: f64,
        payee: &str,
    ) -> VerifyResult<VerifyResponse> {
        self.psd2_verify_request(&Psd2Request::new(number, amount, payee))
            .await
    }

    pub async fn psd2_verify_with_workflow(
        &self,
        number: &str,
        amount: f64,
        payee: &str,
        workflow: Workflow,
    ) -> VerifyResult<VerifyResponse> {
        self.psd2_verify_request(&Psd2Request::with_workflow(number, amount, payee, workflow))
            .await
    }

    /// Send a fully built PSD2 request
    pub async fn psd2_verify_request(&self, request: &Psd2Request) -> VerifyResult<VerifyResponse> {
        self.psd2.execute(request).await
    }
}
