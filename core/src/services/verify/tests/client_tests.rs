//! Unit tests for the client facade

use serde_json::json;
use std::sync::Arc;
use verify_shared::Locale;

use crate::domain::requests::{LineType, VerifyOptions, VerifyRequest, Workflow};
use crate::domain::wire::{Operation, WireValue};
use crate::services::verify::VerifyClient;

use super::mocks::StubHttpWrapper;

const REQUEST_ID: &str = "abcdef0123456789abcdef0123456789";

fn client_returning(payload: serde_json::Value) -> (Arc<StubHttpWrapper>, VerifyClient<StubHttpWrapper>) {
    let http = Arc::new(StubHttpWrapper::returning(payload));
    let client = VerifyClient::new(http.clone());
    (http, client)
}

fn accepted() -> serde_json::Value {
    json!({ "request_id": REQUEST_ID, "status": 0 })
}

#[tokio::test]
async fn test_verify_sends_number_and_brand_only() {
    let (http, client) = client_returning(accepted());

    let response = client.verify("447700900999", "Acme").await.unwrap();

    assert_eq!(response.request_id, REQUEST_ID);
    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Verify);
    assert_eq!(submitted.params.len(), 2);
}

#[tokio::test]
async fn test_verify_from_sets_sender_id() {
    let (http, client) = client_returning(accepted());

    client.verify_from("447700900999", "Acme", "AcmeInc").await.unwrap();

    let params = http.last_request().params;
    assert_eq!(params.get("sender_id"), Some(&WireValue::from("AcmeInc")));
}

#[tokio::test]
async fn test_verify_with_length_sentinel_means_unset() {
    let (http, client) = client_returning(accepted());

    client
        .verify_with_length("447700900999", "Acme", None, -1, None)
        .await
        .unwrap();

    let params = http.last_request().params;
    assert!(!params.contains("code_length"));
    assert!(!params.contains("sender_id"));
    assert!(!params.contains("lg"));
}

#[tokio::test]
async fn test_verify_with_length_and_locale() {
    let (http, client) = client_returning(accepted());

    client
        .verify_with_length("447700900999", "Acme", Some("AcmeInc"), 6, Some(Locale::uk()))
        .await
        .unwrap();

    let params = http.last_request().params;
    assert_eq!(params.get("code_length"), Some(&WireValue::Integer(6)));
    assert_eq!(params.get("lg"), Some(&WireValue::from("en-gb")));
    assert_eq!(params.get("sender_id"), Some(&WireValue::from("AcmeInc")));
}

#[tokio::test]
async fn test_verify_with_options_matches_request() {
    let (http, client) = client_returning(accepted());
    let options = VerifyOptions::new().length(4).line_type(LineType::Mobile);

    client
        .verify_with_options("447700900999", "Acme", options.clone())
        .await
        .unwrap();
    client
        .verify_request(&VerifyRequest::with_options("447700900999", "Acme", options))
        .await
        .unwrap();

    let requests = http.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(requests[0].params.get("type"), Some(&WireValue::from("MOBILE")));
}

#[tokio::test]
async fn test_check_with_ip() {
    let (http, client) = client_returning(json!({ "request_id": REQUEST_ID, "status": "0" }));

    let response = client.check_with_ip(REQUEST_ID, "1234", "10.0.0.1").await.unwrap();

    assert!(response.is_ok());
    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Check);
    assert_eq!(submitted.params.get("request_id"), Some(&WireValue::from(REQUEST_ID)));
    assert_eq!(submitted.params.get("ip_address"), Some(&WireValue::from("10.0.0.1")));
}

#[tokio::test]
async fn test_check_without_ip() {
    let (http, client) = client_returning(json!({ "request_id": REQUEST_ID, "status": "0" }));

    client.check(REQUEST_ID, "1234").await.unwrap();

    assert!(!http.last_request().params.contains("ip_address"));
}

#[tokio::test]
async fn test_search_many_repeats_request_ids() {
    let (http, client) = client_returning(json!({ "verification_requests": [] }));

    let response = client.search_many(["id-1", "id-2"]).await.unwrap();

    assert!(response.is_ok());
    assert!(response.verification_requests.is_empty());

    let params = http.last_request().params;
    let ids: Vec<String> = params.get_all("request_ids").map(|v| v.to_string()).collect();
    assert_eq!(ids, vec!["id-1", "id-2"]);
    assert!(!params.contains("request_id"));
}

#[tokio::test]
async fn test_search_single_id() {
    let (http, client) = client_returning(json!({
        "status": "101",
        "error_text": "No response found"
    }));

    let response = client.search(REQUEST_ID).await.unwrap();

    assert!(!response.is_ok());
    assert_eq!(http.last_request().params.get("request_id"), Some(&WireValue::from(REQUEST_ID)));
}

#[tokio::test]
async fn test_advance_and_cancel_commands() {
    let (http, client) = client_returning(json!({ "status": "0", "command": "trigger_next_event" }));

    client.advance_verification(REQUEST_ID).await.unwrap();
    assert_eq!(
        http.last_request().params.get("cmd"),
        Some(&WireValue::from("trigger_next_event"))
    );

    client.cancel_verification(REQUEST_ID).await.unwrap();
    assert_eq!(http.last_request().params.get("cmd"), Some(&WireValue::from("cancel")));
    assert_eq!(http.request_count(), 2);
}

#[tokio::test]
async fn test_psd2_verify_with_workflow() {
    let (http, client) = client_returning(accepted());

    let response = client
        .psd2_verify_with_workflow("447700900999", 10.31, "Ebony", Workflow::SmsSms)
        .await
        .unwrap();

    assert!(response.is_ok());
    let submitted = http.last_request();
    assert_eq!(submitted.operation, Operation::Psd2);
    assert_eq!(submitted.params.get("workflow_id"), Some(&WireValue::Integer(4)));
}

#[tokio::test]
async fn test_psd2_verify_without_workflow() {
    let (http, client) = client_returning(accepted());

    client.psd2_verify("447700900999", 10.31, "Ebony").await.unwrap();

    let params = http.last_request().params;
    assert!(!params.contains("workflow_id"));
    assert_eq!(params.names().collect::<Vec<_>>(), vec!["number", "amount", "payee"]);
}
