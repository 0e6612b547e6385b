//! Client for the Gemini `generateContent` endpoint.

pub mod wire;

use crate::error::gemini::GeminiClientError;
use crate::gemini::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::prompt::explanation_prompt;

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

/// Upper bound on a single remote call. There are no retries and no
/// cancellation; one failed attempt falls straight through to the local
/// analyzer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const API_KEY_HEADER: &str = "x-goog-api-key";
const MODELS_PATH_PREFIX: &str = "/v1beta/models/";
const GENERATE_CONTENT_VERB: &str = ":generateContent";

#[derive(Clone)]
pub struct GeminiClient {
    base_url: Url,
    client: Client,
    model: String,
    api_key: RedactedApiKey,
}

impl GeminiClient {
    /// Build a client for `base_url_str` (scheme and host only; the
    /// `generateContent` path is appended per request).
    pub fn new(
        base_url_str: &str,
        model: &str,
        api_key: RedactedApiKey,
    ) -> Result<Self, GeminiClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            client,
            model: model.to_string(),
            api_key,
        })
    }

    /// Ask the model to explain `code`.
    ///
    /// # Errors
    ///
    /// Never panics and never surfaces a raw transport fault. Every failure
    /// mode - missing key, connection error, timeout, non-2xx status,
    /// malformed body, missing candidate text - maps to a
    /// [`GeminiClientError`] variant, all of which the orchestration layer
    /// treats as "fall back to local analysis".
    pub async fn explain(&self, code: &str) -> Result<String, GeminiClientError> {
        if self.api_key.is_empty() {
            return Err(GeminiClientError::MissingKey {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let url = self.base_url.join(&format!(
            "{MODELS_PATH_PREFIX}{model}{GENERATE_CONTENT_VERB}",
            model = self.model
        ))?;

        debug!("Requesting explanation from model {}", self.model);

        let body = GenerateContentRequest::from_prompt(explanation_prompt(code));

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status = HttpStatusCode::from(status.as_u16());
            warn!("Gemini request rejected: HTTP {status} ({})", status.category());

            return Err(GeminiClientError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;

        match parsed.first_candidate_text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(GeminiClientError::NoExplanation {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
