// Unit tests for HTTP status categorization

use crate::http_status::HttpStatusCode;

/// **VALUE**: Verifies the 4xx/5xx boundaries used to describe remote failures.
///
/// **BUG THIS CATCHES**: An off-by-one in the range checks would mislabel 400
/// or 500 responses in log output and error messages.
#[test]
fn given_boundary_codes_when_categorized_then_ranges_are_exact() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(400).is_server_error());
}

#[test]
fn given_status_codes_when_category_called_then_returns_expected_label() {
    assert_eq!(HttpStatusCode(403).category(), "client error");
    assert_eq!(HttpStatusCode(503).category(), "server error");
    assert_eq!(HttpStatusCode(302).category(), "unexpected status");
}

#[test]
fn given_u16_when_converted_then_displays_numeric_code() {
    let status = HttpStatusCode::from(500u16);
    assert_eq!(status.to_string(), "500");
}
