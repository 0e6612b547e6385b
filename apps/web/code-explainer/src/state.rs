use explainer_core::config::AppConfig;
use explainer_core::credentials;
use explainer_core::error::gemini::GeminiClientError;
use explainer_core::gemini::GeminiClient;

use log::debug;

/// Read-only per-process state shared across requests.
///
/// Deliberately not a credential cache: the key is re-read from the
/// environment on every submit, so adding or removing it while the server
/// runs takes effect on the next request.
#[derive(Clone)]
pub struct AppState {
    config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the remote client for this submit event, or `None` when no
    /// credential is currently configured.
    pub fn remote_client(&self) -> Result<Option<GeminiClient>, GeminiClientError> {
        match credentials::load_api_key(&self.config.provider.api_key_env) {
            Some(key) => {
                debug!("Credential present; remote path enabled for this request");

                let client = GeminiClient::new(
                    &self.config.provider.api_base_url,
                    &self.config.provider.model,
                    key,
                )?;

                Ok(Some(client))
            }
            None => Ok(None),
        }
    }
}
