//! Stub transport for testing the endpoints and the client

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::domain::wire::ApiRequest;
use crate::errors::{VerifyError, VerifyResult};
use crate::services::verify::traits::HttpWrapper;

enum StubResponse {
    Json(Value),
    HttpStatus(u16, String),
}

// Records every submitted request and answers with a canned response
pub struct StubHttpWrapper {
    pub requests: Mutex<Vec<ApiRequest>>,
    response: StubResponse,
}

impl StubHttpWrapper {
    pub fn returning(payload: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: StubResponse::Json(payload),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: StubResponse::HttpStatus(status, message.to_string()),
        }
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was submitted")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpWrapper for StubHttpWrapper {
    async fn execute(&self, request: ApiRequest) -> VerifyResult<Value> {
        self.requests.lock().unwrap().push(request);
        match &self.response {
            StubResponse::Json(payload) => Ok(payload.clone()),
            StubResponse::HttpStatus(status, message) => {
                Err(VerifyError::http_status(*status, message.clone()))
            }
        }
    }
}
