pub mod analysis;
pub mod config;
pub mod credentials;
pub mod error;
pub mod prompt;
pub mod report;

pub mod gemini;

#[cfg(test)]
mod tests;

pub const GEMINI_API_HOSTNAME: &str = "generativelanguage.googleapis.com";
pub const GEMINI_API_BASE_URL: &str =
    const_format::concatcp!("https://", GEMINI_API_HOSTNAME);
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
