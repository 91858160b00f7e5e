//! Unit tests for the endpoint wrappers

use serde_json::json;
use std::sync::Arc;

use crate::domain::requests::{
    CheckRequest, ControlRequest, Psd2Request, SearchRequest, VerifyControlCommand, VerifyRequest,
    Workflow,
};
use crate::domain::responses::{VerifyDetailsStatus, VerifyStatus};
use crate::domain::wire::{Operation, WireValue};
use crate::errors::VerifyError;
use crate::services::verify::{
    CheckEndpoint, ControlEndpoint, HttpWrapper, Psd2Endpoint, SearchEndpoint, VerifyEndpoint,
};

use super::mocks::StubHttpWrapper;

const REQUEST_ID: &str = "abcdef0123456789abcdef0123456789";

fn accepted() -> serde_json::Value {
    json!({ "request_id": REQUEST_ID, "status": "0" })
}

#[tokio::test]
async fn test_verify_endpoint_submits_to_verify_operation() {
    let http = Arc::new(StubHttpWrapper::returning(accepted()));
    let endpoint = VerifyEndpoint::new(http.clone());

    let response = endpoint
        .execute(&VerifyRequest::new("447700900999", "Acme"))
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.request_id, REQUEST_ID);

    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Verify);
    assert_eq!(submitted.params.names().collect::<Vec<_>>(), vec!["number", "brand"]);
}

#[tokio::test]
async fn test_psd2_endpoint_sends_amount_and_payee() {
    let http = Arc::new(StubHttpWrapper::returning(accepted()));
    let endpoint = Psd2Endpoint::new(http.clone());

    let request = Psd2Request::with_workflow("447700900999", 10.31, "Ebony", Workflow::TtsTts);
    endpoint.execute(&request).await.unwrap();

    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Psd2);
    assert_eq!(submitted.params.get("amount"), Some(&WireValue::Decimal(10.31)));
    assert_eq!(submitted.params.get("payee"), Some(&WireValue::from("Ebony")));
    assert_eq!(submitted.params.get("workflow_id"), Some(&WireValue::Integer(3)));
}

#[tokio::test]
async fn test_non_zero_status_is_not_an_error() {
    let http = Arc::new(StubHttpWrapper::returning(json!({
        "status": "10",
        "error_text": "Concurrent verifications to the same number are not allowed"
    })));
    let endpoint = VerifyEndpoint::new(http);

    let response = endpoint
        .execute(&VerifyRequest::new("447700900999", "Acme"))
        .await
        .unwrap();

    assert_eq!(response.status, VerifyStatus::AlreadyRequested);
    assert!(!response.is_ok());
    assert!(response.error_text.is_some());
}

#[tokio::test]
async fn test_collaborator_error_propagates_unchanged() {
    let http = Arc::new(StubHttpWrapper::failing(500, "Internal Server Error"));
    let endpoint = CheckEndpoint::new(http.clone());

    let result = endpoint.execute(&CheckRequest::new(REQUEST_ID, "1234")).await;

    match result {
        Err(VerifyError::Client { status, message }) => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected client error, got {:?}", other),
    }
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_unexpected_payload_is_a_parse_error() {
    let http = Arc::new(StubHttpWrapper::returning(json!({ "request_id": REQUEST_ID })));
    let endpoint = VerifyEndpoint::new(http);

    let result = endpoint
        .execute(&VerifyRequest::new("447700900999", "Acme"))
        .await;

    match result {
        Err(VerifyError::ResponseParse { operation, .. }) => {
            assert_eq!(operation, Operation::Verify);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_check_endpoint() {
    let http = Arc::new(StubHttpWrapper::returning(json!({
        "request_id": REQUEST_ID,
        "event_id": "0A00000012345678",
        "status": "0",
        "price": "0.10000000",
        "currency": "EUR"
    })));
    let endpoint = CheckEndpoint::new(http.clone());

    let response = endpoint
        .execute(&CheckRequest::new(REQUEST_ID, "1234").with_ip_address("123.0.0.255"))
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.price, Some(0.1));

    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Check);
    assert_eq!(submitted.params.get("code"), Some(&WireValue::from("1234")));
    assert_eq!(submitted.params.get("ip_address"), Some(&WireValue::from("123.0.0.255")));
}

#[tokio::test]
async fn test_search_endpoint_single_record() {
    let http = Arc::new(StubHttpWrapper::returning(json!({
        "request_id": REQUEST_ID,
        "number": "447700900999",
        "status": "EXPIRED",
        "date_submitted": "2016-05-15 03:55:05",
        "checks": []
    })));
    let endpoint = SearchEndpoint::new(http.clone());

    let response = endpoint.execute(&SearchRequest::new(REQUEST_ID)).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.first().map(|d| d.status), Some(VerifyDetailsStatus::Expired));
    assert_eq!(http.last_request().operation, Operation::Search);
}

#[tokio::test]
async fn test_control_endpoint() {
    let http = Arc::new(StubHttpWrapper::returning(json!({
        "status": "0",
        "command": "cancel"
    })));
    let endpoint = ControlEndpoint::new(http.clone());

    let response = endpoint
        .execute(&ControlRequest::new(REQUEST_ID, VerifyControlCommand::Cancel))
        .await
        .unwrap();

    assert_eq!(response.command, Some(VerifyControlCommand::Cancel));

    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Control);
    assert_eq!(submitted.params.get("cmd"), Some(&WireValue::from("cancel")));
}

#[tokio::test]
async fn test_endpoint_accepts_trait_object() {
    let http: Arc<dyn HttpWrapper> = Arc::new(StubHttpWrapper::returning(accepted()));
    let endpoint = VerifyEndpoint::new(http);

    let response = endpoint
        .execute(&VerifyRequest::new("447700900999", "Acme"))
        .await
        .unwrap();

    assert_eq!(response.request_id, REQUEST_ID);
}
