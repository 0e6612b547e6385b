//! End-to-end submit pipeline against a mocked endpoint: remote outcome
//! drives provenance and the status banner.

use explainer_core::analysis::CREDENTIAL_HINT;
use explainer_core::gemini::GeminiClient;
use explainer_core::report::{BannerKind, Provenance, StatusBanner, explain_snippet};

use common::RedactedApiKey;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        &server.uri(),
        "gemini-2.0-flash",
        RedactedApiKey::new(String::from("test-key")),
    )
    .unwrap()
}

/// **VALUE**: Credential present, remote down: the user must see the local
/// analysis under the error banner - not the informational one, which would
/// hide that their configured key went unused.
#[tokio::test]
async fn given_failing_remote_when_explained_then_local_with_error_banner() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let report = explain_snippet("def foo():\n    pass", Some(&client))
        .await
        .unwrap();

    assert_eq!(report.provenance, Provenance::Local);
    assert_eq!(report.status, StatusBanner::RemoteFailed);
    assert_eq!(report.status.kind(), BannerKind::Error);
    assert!(report.text.contains("`foo` function"));
    assert!(report.text.contains(CREDENTIAL_HINT));
}

#[tokio::test]
async fn given_healthy_remote_when_explained_then_remote_with_success_banner() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "The function returns its input."}]}}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let report = explain_snippet("def identity(x):\n    return x", Some(&client))
        .await
        .unwrap();

    assert_eq!(report.provenance, Provenance::Remote);
    assert_eq!(report.status, StatusBanner::RemoteSuccess);
    assert_eq!(report.text, "The function returns its input.");
}

/// A well-formed response with only blank text is "no usable result" and
/// takes the same fallback as an outright failure.
#[tokio::test]
async fn given_blank_remote_text_when_explained_then_falls_back_to_local() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let report = explain_snippet("x = 5\ny = 10", Some(&client)).await.unwrap();

    assert_eq!(report.provenance, Provenance::Local);
    assert_eq!(report.status, StatusBanner::RemoteFailed);
    assert!(report.text.contains("**Variables used:** 2"));
}
