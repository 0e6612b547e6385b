//! Smoke tests for the presentation routes.

use code_explainer::routes::app_router;
use code_explainer::state::AppState;

use explainer_core::config::AppConfig;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn router() -> axum::Router {
    app_router(Arc::new(AppState::new(AppConfig::default())))
}

#[tokio::test]
async fn given_root_request_then_serves_single_page() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(page.contains("AI Code Explainer"));
    assert!(page.contains("/api/explain"));
}

#[tokio::test]
async fn given_health_request_then_responds_ok() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
