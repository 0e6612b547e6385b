use common::ErrorLocation;

use thiserror::Error;

/// The one rejection the orchestration layer can produce. Every other
/// failure mode degrades to the local analyzer instead of erroring.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("empty or whitespace-only code snippet {location}")]
    EmptyInput { location: ErrorLocation },
}

impl ValidationError {
    /// Text shown to the user in the warning banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput { .. } => "Please enter some code first.",
        }
    }
}
