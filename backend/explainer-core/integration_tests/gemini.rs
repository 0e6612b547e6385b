//! Public API tests for the Gemini client against a mocked endpoint.
//! Every failure mode must come back as a typed error - a panic or an
//! unhandled fault here would take down a submit handler in production.

use explainer_core::error::gemini::GeminiClientError;
use explainer_core::gemini::GeminiClient;

use common::RedactedApiKey;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_MODEL: &str = "gemini-2.0-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client_for(server: &MockServer, key: &str) -> GeminiClient {
    GeminiClient::new(
        &server.uri(),
        TEST_MODEL,
        RedactedApiKey::new(key.to_string()),
    )
    .expect("client construction should succeed")
}

/// **VALUE**: The happy path: a valid candidate comes back as the exact
/// trimmed text, via the documented request shape and auth header.
#[tokio::test]
async fn given_valid_candidate_when_explained_then_returns_trimmed_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "  This code adds two numbers.  \n"}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key");

    let text = client
        .explain("def add(a, b):\n    return a + b")
        .await
        .expect("valid response should succeed");

    assert_eq!(text, "This code adds two numbers.");
}

/// **VALUE**: A 500 from the endpoint must surface as a typed `Server`
/// error whose message names the status - never as a panic.
#[tokio::test]
async fn given_http_500_when_explained_then_server_error_references_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key");

    let err = client.explain("x = 1").await.expect_err("500 must error");
    let rendered = err.to_string();

    match err {
        GeminiClientError::Server { status, message, .. } => {
            assert!(status.is_server_error());
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected Server error, got: {other}"),
    }
    assert!(rendered.contains("500"), "message should name the status");
}

#[tokio::test]
async fn given_body_without_candidates_when_explained_then_no_explanation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key");

    let err = client.explain("x = 1").await.expect_err("must error");

    assert!(matches!(err, GeminiClientError::NoExplanation { .. }));
    assert!(err.to_string().contains("No explanation generated"));
}

/// Whitespace-only candidate text is as useless as no candidate at all.
#[tokio::test]
async fn given_blank_candidate_text_when_explained_then_no_explanation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "   \n  "}]}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key");

    let err = client.explain("x = 1").await.expect_err("must error");

    assert!(matches!(err, GeminiClientError::NoExplanation { .. }));
}

#[tokio::test]
async fn given_non_json_body_when_explained_then_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key");

    let err = client.explain("x = 1").await.expect_err("must error");

    assert!(matches!(err, GeminiClientError::Json { .. }));
}

/// **VALUE**: An empty credential short-circuits before any I/O.
///
/// **BUG THIS CATCHES**: Would catch the guard being dropped, which would
/// waste a network round-trip (and a predictable 401) on every submission
/// from an unconfigured install.
#[tokio::test]
async fn given_empty_key_when_explained_then_missing_key_without_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, "");

    let err = client.explain("x = 1").await.expect_err("must error");

    assert!(matches!(err, GeminiClientError::MissingKey { .. }));
    server.verify().await;
}

/// Connection failures (nothing listening) map to the transport variant.
#[tokio::test]
async fn given_unreachable_endpoint_when_explained_then_http_error() {
    let client = GeminiClient::new(
        "http://127.0.0.1:1",
        TEST_MODEL,
        RedactedApiKey::new(String::from("test-key")),
    )
    .unwrap();

    let err = client.explain("x = 1").await.expect_err("must error");

    assert!(matches!(err, GeminiClientError::Http { .. }));
}
