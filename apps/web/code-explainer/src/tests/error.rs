// Unit tests for the HTTP error type
// Tests serialization and the status-code mapping behind IntoResponse.

use crate::error::AppError;

use common::ErrorLocation;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// **VALUE**: Errors must serialize cleanly - they are logged as structured
/// values and the variant tag is the only machine-readable discriminator.
#[test]
fn given_app_error_when_serialized_then_succeeds_with_variant_tag() {
    let err = AppError::Validation {
        message: String::from("Please enter some code first."),
        location: ErrorLocation::from(Location::caller()),
    };

    let json = serde_json::to_string(&err).expect("error should serialize");

    assert!(json.contains("Validation"));
    assert!(json.contains("Please enter some code first."));
}

/// **VALUE**: A validation failure is the user's problem (422), not a
/// server fault (500). The page styles the two differently.
#[test]
fn given_validation_error_when_converted_then_responds_422() {
    let err = AppError::Validation {
        message: String::from("Please enter some code first."),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn given_internal_error_when_converted_then_responds_500() {
    let err = AppError::Internal {
        message: String::from("boom"),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
