//! Submit-event orchestration: validate, try the remote path, fall back.
//!
//! Everything here is request-scoped. A report is assembled, rendered by the
//! caller, and dropped; nothing survives to the next submission.

use crate::analysis;
use crate::error::report::ValidationError;
use crate::gemini::GeminiClient;

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, info, warn};
use serde::Serialize;

/// Where the displayed explanation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Remote,
    Local,
}

impl Provenance {
    /// Panel label shown next to the explanation.
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Remote => "Gemini",
            Provenance::Local => "Local",
        }
    }
}

/// Auxiliary status line rendered under the explanation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBanner {
    /// The remote model produced the displayed text.
    RemoteSuccess,
    /// A credential was present but the remote attempt failed.
    RemoteFailed,
    /// No credential configured; the remote path was never attempted.
    LocalOnly,
}

impl StatusBanner {
    pub fn kind(&self) -> BannerKind {
        match self {
            StatusBanner::RemoteSuccess => BannerKind::Success,
            StatusBanner::RemoteFailed => BannerKind::Error,
            StatusBanner::LocalOnly => BannerKind::Info,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusBanner::RemoteSuccess => "Explanation generated using the Gemini API.",
            StatusBanner::RemoteFailed => {
                "API failed. Using basic analysis. Please check your API key and connection."
            }
            StatusBanner::LocalOnly => {
                "Using basic code analysis. Set GEMINI_API_KEY for AI explanations."
            }
        }
    }
}

/// Visual severity of a [`StatusBanner`], used by the page to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

/// One rendered submit outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationReport {
    pub text: String,
    pub provenance: Provenance,
    pub status: StatusBanner,
}

/// Run one submit event.
///
/// `remote` is `Some` exactly when a credential was found for this
/// invocation. Remote failures of any kind - and remote successes carrying
/// no text - degrade to the local analyzer; the only error a caller ever
/// sees is the empty-input rejection.
pub async fn explain_snippet(
    code: &str,
    remote: Option<&GeminiClient>,
) -> Result<ExplanationReport, ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::EmptyInput {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if let Some(client) = remote {
        match client.explain(code).await {
            Ok(text) if !text.is_empty() => {
                info!("Remote explanation rendered ({} chars)", text.len());
                return Ok(ExplanationReport {
                    text,
                    provenance: Provenance::Remote,
                    status: StatusBanner::RemoteSuccess,
                });
            }
            Ok(_) => warn!("Remote explanation was empty; falling back to local analysis"),
            Err(e) => warn!("Remote explanation failed: {e}; falling back to local analysis"),
        }

        return Ok(ExplanationReport {
            text: analysis::analyze(code),
            provenance: Provenance::Local,
            status: StatusBanner::RemoteFailed,
        });
    }

    debug!("No credential configured; using local analysis");

    Ok(ExplanationReport {
        text: analysis::analyze(code),
        provenance: Provenance::Local,
        status: StatusBanner::LocalOnly,
    })
}
