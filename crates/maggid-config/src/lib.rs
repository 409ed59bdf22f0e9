#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod gemini;
pub mod health;
mod loader;
pub mod models;
pub mod server;
pub mod telemetry;

use maggid_audio::AudioParameters;
use serde::Deserialize;

pub use cors::*;
pub use env::ExpandError;
pub use gemini::*;
pub use health::*;
pub use models::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Maggid configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API connection
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Model identifiers per operation
    #[serde(default)]
    pub models: ModelsConfig,
    /// Sampling parameters assumed for PCM that does not declare its own
    #[serde(default)]
    pub audio: AudioParameters,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
