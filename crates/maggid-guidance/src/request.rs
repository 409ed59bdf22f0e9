use axum::body::Body;
use serde::de::DeserializeOwned;

use crate::error::GuidanceError;

/// Extractor for JSON request bodies
///
/// A missing `Content-Type` is accepted; an explicit non-JSON type is not.
/// An empty body deserializes as `{}`.
pub struct ExtractPayload<T>(pub T);

/// Body limit for guidance requests (1 MiB)
pub const BODY_LIMIT_BYTES: usize = 1 << 20;

fn is_json(value: &http::HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = GuidanceError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .is_some_and(|value| !is_json(value))
        {
            return Err(GuidanceError::UnsupportedMediaType);
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                GuidanceError::PayloadTooLarge(BODY_LIMIT_BYTES)
            } else {
                GuidanceError::MalformedBody(format!("Failed to read request body: {err}"))
            }
        })?;

        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"{}" } else { &bytes };

        serde_json::from_slice::<T>(bytes)
            .map(Self)
            .map_err(|e| GuidanceError::MalformedBody(format!("Failed to parse request body: {e}")))
    }
}
