use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The HTTP layer turns
/// these into [`ErrorEnvelope`] bodies, keeping domain errors decoupled
/// from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Optional extra detail shown next to the message
    fn details(&self) -> Option<String> {
        None
    }

    /// Render the error as a response envelope
    fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.client_message(),
            details: self.details(),
        }
    }
}

/// JSON error body returned by every handler
///
/// Serializes as `{"error": "...", "details": "..."}`, omitting `details`
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    pub error: String,
    /// Additional context, usually the upstream message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    /// Envelope with a message only
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}
