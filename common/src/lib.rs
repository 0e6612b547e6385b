//! Shared building blocks for the code-explainer workspace.
//!
//! This crate contains pure types with no business logic: source-location
//! capture for structured errors, the redacted credential wrapper, and HTTP
//! status categorization. Both `explainer-core` and the web application
//! depend on it, so nothing here may pull in reqwest, axum, or tokio.

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
