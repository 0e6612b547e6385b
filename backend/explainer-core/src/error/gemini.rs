use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Everything that can go wrong between "submit" and "text came back".
///
/// The orchestration layer treats every variant identically - fall back to
/// local analysis - so these exist for diagnostics, not control flow.
#[derive(Debug, ThisError)]
pub enum GeminiClientError {
    /// The wrapped credential was empty; no request was attempted.
    #[error("API key is empty - remote explanation skipped {location}")]
    MissingKey { location: ErrorLocation },

    /// Transport-level failure: connection refused, DNS, timeout, TLS.
    #[error("API Connection Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    /// The endpoint answered with a non-success status.
    #[error("API Connection Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// The body was not JSON of the expected shape.
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    /// A well-formed response that carries no usable candidate text.
    #[error("No explanation generated from API {location}")]
    NoExplanation { location: ErrorLocation },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for GeminiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        GeminiClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GeminiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GeminiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for GeminiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GeminiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
