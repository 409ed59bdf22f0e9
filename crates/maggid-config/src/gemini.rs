use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Connection settings for the Google Generative Language API
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter
    ///
    /// An empty string counts as unset; requests then fail with
    /// "API key not configured" instead of reaching the network.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override, defaults to the public `v1beta` endpoint
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Upstream request timeout (e.g. "60s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
        }
    }
}

impl GeminiConfig {
    /// API key, ignoring empty values
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref().filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Parsed upstream timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout string is not a valid duration
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid gemini.timeout '{}': {e}", self.timeout))
    }
}

fn default_timeout() -> String {
    "60s".to_string()
}
