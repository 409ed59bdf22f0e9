use axum::{
    Json,
    body::Body,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use http::{HeaderValue, header};
use maggid_audio::{AudioParameters, WAV_MIME, encode_wav, is_raw_pcm, pcm_parameters};
use maggid_gemini::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};

use super::{Guidance, required};
use crate::error::{GuidanceError, Result};
use crate::prompt;
use crate::types::{SpeechBody, SpeechFormat, SpeechRequest};

/// Synthesized speech, ready to be sent to the client
#[derive(Debug)]
pub struct SpeechAudio {
    /// Audio bytes, WAV when the upstream returned raw PCM
    pub audio: Bytes,
    pub mime_type: String,
    pub format: SpeechFormat,
}

impl IntoResponse for SpeechAudio {
    fn into_response(self) -> Response {
        match self.format {
            SpeechFormat::Json => Json(SpeechBody {
                audio: STANDARD.encode(&self.audio),
                mime_type: self.mime_type,
            })
            .into_response(),
            SpeechFormat::Wav => {
                let content_type = HeaderValue::from_str(&self.mime_type)
                    .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

                ([(header::CONTENT_TYPE, content_type)], Body::from(self.audio)).into_response()
            }
        }
    }
}

impl Guidance {
    /// Speak `text` in the rabbi's voice
    ///
    /// When the primary model fails, the fallback model is tried once with a
    /// shorter prompt. If that fails too, the primary error is returned.
    pub async fn speak(&self, request: SpeechRequest) -> Result<SpeechAudio> {
        let text = required(request.text, "Text is required")?;

        let primary = self
            .synthesize(&self.models.speech, prompt::speech(&text, request.language.as_deref()))
            .await;

        let inline = match primary {
            Ok(inline) => inline,
            Err(GuidanceError::MissingApiKey) => return Err(GuidanceError::MissingApiKey),
            Err(primary_error) => {
                tracing::warn!(
                    model = %self.models.speech,
                    fallback = %self.models.speech_fallback,
                    error = %primary_error,
                    "speech synthesis failed, trying fallback model"
                );

                match self
                    .synthesize(&self.models.speech_fallback, prompt::speech_fallback(&text))
                    .await
                {
                    Ok(inline) => inline,
                    Err(fallback_error) => {
                        tracing::error!(
                            model = %self.models.speech_fallback,
                            error = %fallback_error,
                            "fallback speech synthesis failed"
                        );
                        return Err(primary_error);
                    }
                }
            }
        };

        let (audio, mime_type) = transcode(&inline, self.audio)?;

        Ok(SpeechAudio {
            audio,
            mime_type,
            format: request.format,
        })
    }

    /// One speech attempt, returning the first inline audio part
    async fn synthesize(&self, model: &str, prompt: String) -> Result<InlineData> {
        let wire = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::text(prompt)],
            }],
            ..GenerateContentRequest::default()
        }
        .with_config(GenerationConfig::speech(self.models.voice.as_str()));

        tracing::debug!(model, voice = %self.models.voice, "speech synthesis");

        let response = self
            .generator
            .generate(model, &wire)
            .await
            .map_err(GuidanceError::upstream)?;

        response
            .first_inline_data()
            .filter(|inline| !inline.data.is_empty())
            .cloned()
            .ok_or(GuidanceError::NoAudio)
    }
}

/// Decode inline audio, wrapping raw PCM in a WAV container
///
/// Audio in any other format is passed through with its own MIME type.
fn transcode(inline: &InlineData, defaults: AudioParameters) -> Result<(Bytes, String)> {
    let raw = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| GuidanceError::InvalidAudio(e.to_string()))?;

    if !is_raw_pcm(&inline.mime_type) {
        return Ok((Bytes::from(raw), inline.mime_type.clone()));
    }

    let params = pcm_parameters(&inline.mime_type, defaults);
    let wav = encode_wav(&raw, params)?;

    tracing::debug!(
        upstream_mime = %inline.mime_type,
        sample_rate = params.sample_rate,
        channels = params.channel_count,
        duration_ms = params.duration_millis(raw.len()),
        "wrapped PCM in WAV container"
    );

    Ok((wav, WAV_MIME.to_owned()))
}
