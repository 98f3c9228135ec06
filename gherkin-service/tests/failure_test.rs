//! The internal-error path, driven by injected backends that fail.

mod common;

use axum::http::StatusCode;
use common::{post_json, router_with, router_with_timeout, valid_request, GENERATE_PATH};
use gherkin_service::services::generators::MockGenerator;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn assert_internal_error(body: &serde_json::Value) {
    assert_eq!(
        body,
        &json!({
            "status": "FAIL",
            "statusCode": 500,
            "message": "Internal Server Error"
        })
    );
}

#[tokio::test]
async fn backend_error_returns_internal_server_error() {
    let router = router_with(Arc::new(MockGenerator::failing("model weights not found")));

    let response = post_json(router, GENERATE_PATH, valid_request(123)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_internal_error(&response.body);
}

#[tokio::test]
async fn backend_error_detail_is_not_leaked() {
    let router = router_with(Arc::new(MockGenerator::failing("secret-path /opt/models")));

    let response = post_json(router, GENERATE_PATH, valid_request(1)).await;

    assert!(!response.body.to_string().contains("secret-path"));
}

#[tokio::test]
async fn backend_panic_returns_internal_server_error() {
    let router = router_with(Arc::new(MockGenerator::panicking()));

    let response = post_json(router, GENERATE_PATH, valid_request(123)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_internal_error(&response.body);
}

#[tokio::test]
async fn slow_backend_times_out_as_internal_error() {
    let generator =
        MockGenerator::responding("Scenario: late").with_delay(Duration::from_millis(500));
    let router = router_with_timeout(generator, 25);

    let response = post_json(router, GENERATE_PATH, valid_request(123)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_internal_error(&response.body);
}

#[tokio::test]
async fn invalid_request_never_reaches_backend() {
    let generator = Arc::new(MockGenerator::responding("Scenario: unused"));
    let router = router_with(generator.clone());

    let response = post_json(router, GENERATE_PATH, valid_request(-1)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn injected_backend_output_is_returned_verbatim() {
    let gherkin = "Scenario: Transfer funds
  Given an account with 100
  When I transfer 40
  Then the balance is 60";
    let generator = Arc::new(MockGenerator::responding(gherkin));
    let router = router_with(generator.clone());

    let response = post_json(router, GENERATE_PATH, valid_request(77)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["generatedGherkin"], gherkin);
    assert_eq!(generator.calls(), 1);
}
