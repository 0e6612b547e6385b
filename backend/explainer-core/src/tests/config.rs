// Unit tests for configuration loading and validation

use crate::config::AppConfig;
use crate::error::config::ConfigError;
use crate::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_MODEL, GEMINI_API_BASE_URL};

use std::fs;

/// **VALUE**: A missing config file must fall back to working defaults so
/// the binary runs with zero setup.
#[test]
fn given_missing_file_when_loaded_then_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.provider.api_base_url, GEMINI_API_BASE_URL);
    assert_eq!(config.provider.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(config.provider.api_key_env, DEFAULT_API_KEY_ENV);
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
fn given_partial_file_when_loaded_then_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("explainer.toml"),
        "[server]\nport = 9999\n",
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.server.port, 9999);
    assert_eq!(config.provider.model, DEFAULT_GEMINI_MODEL);
}

/// **VALUE**: A present-but-broken file must be a hard error, not a silent
/// fallback - otherwise a typo quietly reroutes requests to the default
/// endpoint.
#[test]
fn given_unparseable_file_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("explainer.toml"), "not valid toml [[[").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_when_validated_then_each_is_rejected() {
    let mut config = AppConfig::default();
    config.provider.api_base_url = String::from("ftp://example.com");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = AppConfig::default();
    config.provider.model = String::new();
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.provider.api_key_env = String::new();
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn given_file_with_invalid_url_when_loaded_then_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("explainer.toml"),
        "[provider]\napi_base_url = \"generativelanguage.googleapis.com\"\n",
    )
    .unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
