#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use gherkin_service::config::GherkinConfig;
use gherkin_service::services::generators::{MockGenerator, TemplateGenerator};
use gherkin_service::services::GherkinGenerator;
use gherkin_service::startup::{build_router, AppState, Application};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

pub const GENERATE_PATH: &str = "/v1/generate-gherkin";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

pub fn router_with(generator: Arc<dyn GherkinGenerator>) -> Router {
    build_router(AppState::new(GherkinConfig::for_tests(), generator))
}

pub fn default_router() -> Router {
    router_with(Arc::new(TemplateGenerator::new()))
}

pub fn router_with_timeout(generator: MockGenerator, timeout_ms: u64) -> Router {
    let mut config = GherkinConfig::for_tests();
    config.generation.timeout_ms = Some(timeout_ms);
    build_router(AppState::new(config, Arc::new(generator)))
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_raw(router: Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    post_raw(router, uri, body.to_string()).await
}

pub fn valid_request(request_id: i64) -> serde_json::Value {
    serde_json::json!({
        "domain": "test_domain",
        "requestId": request_id,
        "requirementText": "Test requirement text",
    })
}

/// A running server on a random port, for tests that need a real socket.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let state = AppState::new(GherkinConfig::for_tests(), Arc::new(TemplateGenerator::new()));
        let app = Application::build(state)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/v1/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
