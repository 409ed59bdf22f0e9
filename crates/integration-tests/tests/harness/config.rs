//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use maggid_config::{Config, CorsConfig, GeminiConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with a test API key and no upstream
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                gemini: GeminiConfig {
                    api_key: Some(SecretString::from("test-key")),
                    timeout: "5s".to_owned(),
                    ..GeminiConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the Gemini client at a mock backend
    pub fn with_gemini(mut self, base_url: &str) -> Self {
        self.config.gemini.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Remove the API key
    pub fn without_api_key(mut self) -> Self {
        self.config.gemini.api_key = None;
        self
    }

    /// Set the guidance route prefix
    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.config.server.route_prefix);
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config.validate().expect("valid test config");
        self.config
    }
}
