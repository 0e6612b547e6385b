//! HTTP surface: the single page, the explain endpoint, and a health probe.

mod explain;

pub use explain::{ExplainRequest, ExplainResponse, StatusPayload};

use crate::state::AppState;

use std::sync::Arc;

use axum::Router;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// The single page. Presentation only - the behavioral surface of the
/// application is `/api/explain`.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/explain", post(explain::explain_snippet))
        .layer(cors)
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}
