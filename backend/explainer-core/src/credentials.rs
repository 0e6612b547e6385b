//! Credential lookup.
//!
//! The key is read from the environment once per submit event. Its absence
//! is a routing signal (use the local analyzer), never an error.

use common::RedactedApiKey;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Values people paste from setup guides without substituting their key.
const PLACEHOLDER_VALUES: &[&str] = &["your_api_key_here", "changeme", "todo", "xxx"];

/// Load a `.env` file from the working directory or next to the executable.
///
/// Missing files are a non-event; the environment may already be populated.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(()) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return Some(env_path);
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    debug!("No .env file found - using existing environment variables");
    None
}

/// Read the API key from `env_var`.
///
/// Returns `None` when the variable is unset, empty, or still holds a
/// placeholder from the setup instructions. `None` deterministically routes
/// the submit event to the local analyzer.
pub fn load_api_key(env_var: &str) -> Option<RedactedApiKey> {
    match env::var(env_var) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                warn!("{env_var} is set but empty - remote explanations disabled");
                return None;
            }

            if PLACEHOLDER_VALUES
                .iter()
                .any(|p| trimmed.eq_ignore_ascii_case(p))
            {
                warn!("{env_var} still holds a placeholder value - remote explanations disabled");
                return None;
            }

            let key = RedactedApiKey::new(trimmed.to_string());
            debug!("Found API key in {env_var} ({} chars)", key.len());
            Some(key)
        }
        Err(env::VarError::NotPresent) => {
            debug!("No {env_var} env var found");
            None
        }
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{env_var} contains invalid unicode - remote explanations disabled");
            None
        }
    }
}
