use common::ErrorLocation;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
///
/// Validation failures are the user's to fix and render as a warning;
/// everything else is a server-side fault. Structured location tracking is
/// kept internally even though the wire body only carries the message.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AppError {
    /// The submitted snippet was rejected before any downstream work.
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Startup wiring failed (log directory, logger, config, listener).
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// A request could not be served for reasons the user cannot fix.
    #[error("Internal Error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

/// Body rendered for a failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::Validation { message, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "warning", message)
            }
            AppError::Startup { message, .. } | AppError::Internal { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "error", message)
            }
        };

        (status, Json(ErrorBody { kind, message })).into_response()
    }
}
