//! `reqwest` implementation of the Verify transport
//!
//! ## Behaviour
//!
//! - `POST {base_uri}{operation path}` with a form-encoded body
//! - `api_key` and `api_secret` are appended to every request
//! - Non-2xx responses become `VerifyError::Client` with the status code
//! - Connect failures and timeouts become `VerifyError::Client` without one
//! - Bodies that are not JSON become `VerifyError::ResponseParse`
//! - Nothing is retried
//! - Secrets and phone numbers never reach the logs

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

use verify_core::{ApiRequest, HttpWrapper, Operation, VerifyError, VerifyResult};
use verify_shared::{ApiConfig, ClientConfig, HttpConfig};

use crate::InfrastructureError;

/// Verify API transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestHttpWrapper {
    client: reqwest::Client,
    api: ApiConfig,
    max_error_body_bytes: usize,
}

impl ReqwestHttpWrapper {
    /// Create a new transport
    ///
    /// # Arguments
    ///
    /// * `api` - Credentials and base URI
    /// * `http` - Timeouts and `User-Agent`
    ///
    /// # Returns
    ///
    /// * `Ok(ReqwestHttpWrapper)` - Ready to submit requests
    /// * `Err(InfrastructureError)` - If the credentials are invalid or the client cannot be built
    pub fn new(api: ApiConfig, http: &HttpConfig) -> Result<Self, InfrastructureError> {
        api.validate().map_err(InfrastructureError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .connect_timeout(http.connect_timeout())
            .user_agent(http.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api,
            max_error_body_bytes: http.max_error_body_bytes,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, InfrastructureError> {
        Self::new(config.api.clone(), &config.http)
    }

    pub fn base_uri(&self) -> &str {
        &self.api.base_uri
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.api.base_uri, operation.path())
    }
}

#[async_trait]
impl HttpWrapper for ReqwestHttpWrapper {
    async fn execute(&self, request: ApiRequest) -> VerifyResult<Value> {
        let operation = request.operation;
        let url = self.url(operation);

        let mut form = request.params.to_form_pairs();
        form.push(("api_key", self.api.api_key.clone()));
        form.push(("api_secret", self.api.api_secret.clone()));

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(operation = %operation, error = %e, "Verify API request failed");
                VerifyError::transport(describe_send_error(&e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(operation = %operation, error = %e, "Failed to read Verify API response");
            VerifyError::Client {
                status: Some(status.as_u16()),
                message: format!("failed to read response body: {}", e),
            }
        })?;

        if !status.is_success() {
            let excerpt = truncate_body(&body, self.max_error_body_bytes);
            warn!(
                operation = %operation,
                http_status = status.as_u16(),
                body = %excerpt,
                "Verify API returned an error status"
            );
            return Err(VerifyError::http_status(
                status.as_u16(),
                format!("{} returned {}: {}", operation, status, excerpt),
            ));
        }

        let payload = serde_json::from_str(&body).map_err(|source| {
            warn!(operation = %operation, error = %source, "Verify API returned a non-JSON body");
            VerifyError::response_parse(operation, source)
        })?;

        info!(
            operation = %operation,
            http_status = status.as_u16(),
            "Verify API request completed"
        );

        Ok(payload)
    }
}

fn describe_send_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}

/// Cap an error body at `max_bytes`, respecting UTF-8 boundaries
fn truncate_body(body: &str, max_bytes: usize) -> String {
    if body.len() <= max_bytes {
        return body.to_string();
    }
    let mut end = max_bytes;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("Bad Gateway", 1024), "Bad Gateway");
    }

    #[test]
    fn test_truncate_body_caps_long_bodies() {
        let body = "x".repeat(2000);
        let truncated = truncate_body(&body, 1024);
        assert_eq!(truncated.len(), 1024 + "...(truncated)".len());
        assert!(truncated.ends_with("...(truncated)"));
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        // 'é' is two bytes; cutting at 3 would split the second one
        let truncated = truncate_body("éééé", 3);
        assert_eq!(truncated, "é...(truncated)");
    }

    #[test]
    fn test_new_rejects_invalid_credentials() {
        let result = ReqwestHttpWrapper::new(ApiConfig::new("", "secret"), &HttpConfig::default());
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_url_joins_base_uri_and_path() {
        let api = ApiConfig::new("key", "secret").with_base_uri("http://localhost:8080/");
        let wrapper = ReqwestHttpWrapper::new(api, &HttpConfig::default()).unwrap();

        assert_eq!(wrapper.base_uri(), "http://localhost:8080");
        assert_eq!(
            wrapper.url(Operation::Psd2),
            "http://localhost:8080/verify/psd2/json"
        );
    }
}
