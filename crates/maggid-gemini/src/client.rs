use async_trait::async_trait;
use maggid_config::GeminiConfig;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{GeminiError, Result};
use crate::http_client::http_client;
use crate::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Default Google Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Message used when the upstream error carries none
const UNKNOWN_ERROR: &str = "Unknown error";

/// Anything able to answer a `generateContent` call
///
/// Handlers depend on this rather than on [`GeminiClient`] so they can run
/// against an in-memory generator in tests.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Run `generateContent` against `model`
    async fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<GenerateContentResponse>;
}

/// Generative Language API client
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl GeminiClient {
    /// Create from the `[gemini]` configuration section
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::Config` if the timeout or base URL is invalid,
    /// or the HTTP client cannot be built
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let timeout = config
            .timeout_duration()
            .map_err(|e| GeminiError::Config(e.to_string()))?;

        let base_url = match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| GeminiError::Config(e.to_string()))?,
        };

        let client = http_client(timeout).map_err(|e| GeminiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key().cloned(),
        })
    }

    /// Whether requests can be sent at all
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the `generateContent` endpoint URL for a model
    fn generate_url(&self, model: &str, api_key: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');

        let mut url = Url::parse(&format!("{base}/models/{model}:generateContent"))
            .map_err(|e| GeminiError::Config(format!("invalid endpoint for model '{model}': {e}")))?;
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(url)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let api_key = self.api_key.as_ref().ok_or(GeminiError::MissingApiKey)?;
        let url = self.generate_url(model, api_key.expose_secret())?;

        tracing::debug!(model, turns = request.contents.len(), "sending generateContent request");

        // The endpoint URL carries the key, so it is stripped from errors
        let response = self.client.post(url).json(request).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(model, error = %e, "upstream request failed");
            GeminiError::Connection(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(model, error = %e, "failed to read upstream body");
            GeminiError::Connection(e.to_string())
        })?;

        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::warn!(model, status = %status, message = %message, "upstream returned error");

            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(model, error = %e, "upstream returned an unparseable body");
            GeminiError::Decode(e.to_string())
        })?;

        if let Some(error) = parsed.error {
            tracing::warn!(model, message = %error.message, "upstream returned error object");

            return Err(GeminiError::Api {
                status: error.code.unwrap_or_else(|| status.as_u16()),
                message: non_empty_or(error.message, UNKNOWN_ERROR),
            });
        }

        Ok(parsed)
    }
}

/// Extract a readable message from an error body
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body) {
        return non_empty_or(parsed.error.message, UNKNOWN_ERROR);
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    if text.is_empty() {
        status.canonical_reason().unwrap_or(UNKNOWN_ERROR).to_owned()
    } else {
        text.to_owned()
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}
