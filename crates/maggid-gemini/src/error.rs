use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors talking to the Generative Language API
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key configured; the request never left the process
    #[error("API key not configured")]
    MissingApiKey,

    /// Client could not be constructed from configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Network or connection failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Upstream answered with an error object
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Upstream body was not a valid `generateContent` response
    #[error("invalid upstream response: {0}")]
    Decode(String),
}

impl GeminiError {
    /// HTTP status reported by the upstream, if it answered at all
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
