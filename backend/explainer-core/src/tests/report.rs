// Unit tests for the orchestration layer
// The remote path needs a live endpoint and is covered by the wiremock
// integration tests; these cover validation and the credential-absent path.

use crate::analysis::CREDENTIAL_HINT;
use crate::error::report::ValidationError;
use crate::report::{BannerKind, Provenance, StatusBanner, explain_snippet};

/// **VALUE**: Empty input must be rejected before any work happens - no
/// analyzer run, no report, just the warning.
#[tokio::test]
async fn given_whitespace_code_when_explained_then_validation_error() {
    let result = explain_snippet("   \n\t", None).await;

    let err = result.expect_err("whitespace input must be rejected");
    assert!(matches!(err, ValidationError::EmptyInput { .. }));
    assert_eq!(err.user_message(), "Please enter some code first.");
}

/// **VALUE**: With no credential the report must be local with the
/// informational banner - not the error banner, which would wrongly tell
/// the user their key is broken.
#[tokio::test]
async fn given_no_client_when_explained_then_local_report_with_info_banner() {
    let report = explain_snippet("x = 5", None).await.unwrap();

    assert_eq!(report.provenance, Provenance::Local);
    assert_eq!(report.status, StatusBanner::LocalOnly);
    assert_eq!(report.status.kind(), BannerKind::Info);
    assert!(report.text.contains(CREDENTIAL_HINT));
}

#[test]
fn given_provenance_when_labeled_then_matches_panel_names() {
    assert_eq!(Provenance::Remote.label(), "Gemini");
    assert_eq!(Provenance::Local.label(), "Local");
}

#[test]
fn given_banners_when_classified_then_kinds_match_severity() {
    assert_eq!(StatusBanner::RemoteSuccess.kind(), BannerKind::Success);
    assert_eq!(StatusBanner::RemoteFailed.kind(), BannerKind::Error);
    assert_eq!(StatusBanner::LocalOnly.kind(), BannerKind::Info);
}
