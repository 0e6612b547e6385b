// Unit tests for the credential wrapper
// The redaction guarantees here are what makes it safe to log errors freely.

use crate::redacted_key::RedactedApiKey;

/// **VALUE**: Verifies the key value never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Errors and state are logged liberally throughout the
/// workspace. If redaction breaks, every failed request would write the
/// credential to the log file.
#[test]
fn given_wrapped_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new(String::from("AIzaSyExample123"));

    let debug = format!("{:?}", key);
    let display = format!("{}", key);

    assert!(!debug.contains("AIzaSyExample123"));
    assert!(!display.contains("AIzaSyExample123"));
    assert!(debug.contains("REDACTED"));
    assert!(display.contains("REDACTED"));
}

#[test]
fn given_wrapped_key_when_accessed_explicitly_then_value_is_intact() {
    let key = RedactedApiKey::new(String::from("test-key"));

    assert_eq!(key.as_str(), "test-key");
    assert_eq!(key.len(), 8);
    assert!(!key.is_empty());
}

/// **VALUE**: Serializing the wrapper must fail loudly, not emit the key.
#[test]
fn given_wrapped_key_when_serialized_then_returns_error() {
    let key = RedactedApiKey::new(String::from("secret"));

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "serialization must be refused");
    let message = result.unwrap_err().to_string();
    assert!(!message.contains("secret"), "error must not echo the key");
}
