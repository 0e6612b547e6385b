//! End-to-end tests for the submit endpoint: real router, mocked upstream.
//!
//! Tests that set a credential mutate the process environment and therefore
//! run serially; each uses its own variable name so values never bleed
//! between scenarios.

use code_explainer::routes::app_router;
use code_explainer::state::AppState;

use explainer_core::config::AppConfig;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(server_uri: &str, key_env: &str) -> axum::Router {
    let mut config = AppConfig::default();
    config.provider.api_base_url = server_uri.to_string();
    config.provider.api_key_env = key_env.to_string();

    app_router(Arc::new(AppState::new(config)))
}

async fn post_code(router: axum::Router, code: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/explain")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "code": code }).to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

/// **VALUE**: With no credential configured the remote client must never be
/// invoked, and the banner must be the informational variant - not the
/// error one, which would tell the user a key they never set is broken.
#[tokio::test]
#[serial]
async fn given_no_credential_when_submitted_then_local_info_and_no_upstream_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    unsafe { std::env::remove_var("EXPLAINER_E2E_UNSET_KEY") };
    let router = router_for(&server.uri(), "EXPLAINER_E2E_UNSET_KEY");

    let (status, body) = post_code(router, "x = 5\nprint(x)").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provenance"], "local");
    assert_eq!(body["source"], "Local");
    assert_eq!(body["status"]["kind"], "info");

    server.verify().await;
}

/// **VALUE**: Credential present, remote failing: the displayed provenance
/// must be local with the error banner - the contract distinguishes
/// "remote attempt failed" from "remote never attempted".
#[tokio::test]
#[serial]
async fn given_credential_and_failing_remote_when_submitted_then_local_error_banner() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    unsafe { std::env::set_var("EXPLAINER_E2E_FAILING_KEY", "test-key") };
    let router = router_for(&server.uri(), "EXPLAINER_E2E_FAILING_KEY");

    let (status, body) = post_code(router, "def foo():\n    pass").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provenance"], "local");
    assert_eq!(body["status"]["kind"], "error");
    assert!(
        body["explanation"]
            .as_str()
            .unwrap()
            .contains("`foo` function")
    );

    unsafe { std::env::remove_var("EXPLAINER_E2E_FAILING_KEY") };
    server.verify().await;
}

#[tokio::test]
#[serial]
async fn given_credential_and_healthy_remote_when_submitted_then_remote_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "This snippet prints a greeting."}]}}
            ]
        })))
        .mount(&server)
        .await;

    unsafe { std::env::set_var("EXPLAINER_E2E_HEALTHY_KEY", "test-key") };
    let router = router_for(&server.uri(), "EXPLAINER_E2E_HEALTHY_KEY");

    let (status, body) = post_code(router, "print('hi')").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provenance"], "remote");
    assert_eq!(body["source"], "Gemini");
    assert_eq!(body["status"]["kind"], "success");
    assert_eq!(body["explanation"], "This snippet prints a greeting.");

    unsafe { std::env::remove_var("EXPLAINER_E2E_HEALTHY_KEY") };
}

#[tokio::test]
#[serial]
async fn given_empty_code_when_submitted_then_422_warning() {
    let server = MockServer::start().await;

    unsafe { std::env::remove_var("EXPLAINER_E2E_VALIDATION_KEY") };
    let router = router_for(&server.uri(), "EXPLAINER_E2E_VALIDATION_KEY");

    let (status, body) = post_code(router, "   \n ").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "warning");
    assert_eq!(body["message"], "Please enter some code first.");
}
