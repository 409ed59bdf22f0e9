use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use maggid_audio::WavError;
use maggid_core::HttpError;
use maggid_gemini::GeminiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuidanceError>;

/// Guidance service errors with their HTTP status codes
#[derive(Debug, Error)]
pub enum GuidanceError {
    /// A required request field is missing or invalid
    #[error("{0}")]
    InvalidRequest(String),

    /// Body is not declared as JSON
    #[error("Unsupported Content-Type, expected: 'Content-Type: application/json'")]
    UnsupportedMediaType,

    /// Body exceeds the size limit
    #[error("Request body is too large, limit is {0} bytes")]
    PayloadTooLarge(usize),

    /// Body could not be read or parsed
    #[error("{0}")]
    MalformedBody(String),

    /// Route exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No upstream API key configured
    #[error("API key not configured")]
    MissingApiKey,

    /// Upstream answered with an error status
    #[error("API error")]
    Api { details: String },

    /// Upstream failed and its message is shown as is
    #[error("{0}")]
    Upstream(String),

    /// Chat upstream failed
    #[error("The Rabbi is momentarily unavailable. Please try again.")]
    RabbiUnavailable { details: String },

    /// Speech model answered without an audio part
    #[error("No audio generated")]
    NoAudio,

    /// Upstream audio payload was not valid base64
    #[error("Invalid audio payload: {0}")]
    InvalidAudio(String),

    /// Upstream PCM could not be wrapped in a WAV container
    #[error(transparent)]
    Wav(#[from] WavError),
}

impl GuidanceError {
    /// Upstream failure reported as `{"error": "API error", "details": ...}`
    pub(crate) fn api(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => Self::MissingApiKey,
            GeminiError::Api { message, .. } => Self::Api { details: message },
            other => Self::Upstream(other.to_string()),
        }
    }

    /// Upstream failure reported with its own message
    pub(crate) fn upstream(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => Self::MissingApiKey,
            other => Self::Upstream(other.to_string()),
        }
    }

    /// Upstream failure of the chat persona
    pub(crate) fn rabbi(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => Self::MissingApiKey,
            other => Self::RabbiUnavailable {
                details: other.to_string(),
            },
        }
    }
}

impl HttpError for GuidanceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingApiKey
            | Self::Api { .. }
            | Self::Upstream(_)
            | Self::RabbiUnavailable { .. }
            | Self::NoAudio => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidAudio(_) | Self::Wav(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) | Self::MalformedBody(_) | Self::UnsupportedMediaType | Self::PayloadTooLarge(_) => {
                "invalid_request_error"
            }
            Self::MethodNotAllowed => "method_not_allowed",
            Self::MissingApiKey => "configuration_error",
            Self::Api { .. } | Self::Upstream(_) | Self::RabbiUnavailable { .. } | Self::NoAudio => "api_error",
            Self::InvalidAudio(_) | Self::Wav(_) => "audio_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Api { details } | Self::RabbiUnavailable { details } => Some(details.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for GuidanceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error_type = self.error_type(), error = %self, details = ?self.details(), "request failed");
        } else {
            tracing::debug!(error_type = self.error_type(), error = %self, "request rejected");
        }

        (status, Json(self.envelope())).into_response()
    }
}
