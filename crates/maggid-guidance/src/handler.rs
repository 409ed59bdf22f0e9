mod daily;
mod rabbi;
mod recommend;
mod speech;
mod translate;

use std::sync::Arc;

use maggid_audio::AudioParameters;
use maggid_config::ModelsConfig;
use maggid_gemini::ContentGenerator;

pub use speech::SpeechAudio;

use crate::error::{GuidanceError, Result};

/// Guidance operations over a content generator
pub struct Guidance {
    generator: Arc<dyn ContentGenerator>,
    models: ModelsConfig,
    audio: AudioParameters,
}

impl Guidance {
    /// `audio` describes PCM whose MIME type does not declare its own parameters
    pub fn new(generator: Arc<dyn ContentGenerator>, models: ModelsConfig, audio: AudioParameters) -> Self {
        Self {
            generator,
            models,
            audio,
        }
    }
}

/// Required non-empty string field
fn required(value: Option<String>, message: &str) -> Result<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| GuidanceError::InvalidRequest(message.to_owned()))
}
