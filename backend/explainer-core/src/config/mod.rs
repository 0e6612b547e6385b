//! File-backed configuration.
//!
//! `explainer.toml` is optional: a missing file yields defaults, a present
//! but invalid file is an error. The credential value never appears here -
//! only the name of the environment variable that holds it.

use crate::error::config::ConfigError;
use crate::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_MODEL, GEMINI_API_BASE_URL};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "explainer.toml";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key, not the key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_api_base_url() -> String {
    GEMINI_API_BASE_URL.to_string()
}
fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}
fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load `{config_dir}/explainer.toml`.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            })?;

        let config: AppConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse {}: {}", config_path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Reject values that would make the explain pipeline unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.provider.api_base_url.starts_with("http://")
            && !self.provider.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid API base URL: {}", self.provider.api_base_url),
            });
        }

        if self.provider.model.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "Provider model cannot be empty".to_string(),
            });
        }

        if self.provider.api_key_env.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "api_key_env cannot be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "Server port cannot be 0".to_string(),
            });
        }

        Ok(())
    }

    /// `host:port` string for the TCP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
