use crate::error::AppError;
use crate::state::AppState;

use explainer_core::report::{self, BannerKind, ExplanationReport, Provenance};

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use log::{error, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
}

/// What the page renders: the explanation, its provenance, and the status
/// banner shown underneath.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
    /// Panel label ("Gemini" or "Local").
    pub source: &'static str,
    pub provenance: Provenance,
    pub status: StatusPayload,
}

#[derive(Debug, Serialize)]
pub struct StatusPayload {
    pub kind: BannerKind,
    pub message: &'static str,
}

impl ExplainResponse {
    fn from_report(report: ExplanationReport) -> Self {
        Self {
            source: report.provenance.label(),
            provenance: report.provenance,
            status: StatusPayload {
                kind: report.status.kind(),
                message: report.status.message(),
            },
            explanation: report.text,
        }
    }
}

/// Handle one submit event.
///
/// # Returns
///
/// * 200 with an [`ExplainResponse`] - remote or local, always labeled
/// * 422 with a warning body - empty/whitespace-only snippet
pub async fn explain_snippet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    let remote = state.remote_client().map_err(|e| {
        error!("Failed to build remote client: {e}");
        AppError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let report = report::explain_snippet(&request.code, remote.as_ref())
        .await
        .map_err(|e| {
            warn!("Rejected submission: {e}");
            AppError::Validation {
                message: e.user_message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    Ok(Json(ExplainResponse::from_report(report)))
}
