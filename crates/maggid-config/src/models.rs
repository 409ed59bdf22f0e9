use serde::Deserialize;

/// Model identifiers used by each guidance operation
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelsConfig {
    /// Conversational model for the rabbi chat (search grounding enabled)
    pub chat: String,
    /// Fast text model for daily inspiration, translation and recommendations
    pub text: String,
    /// Primary speech synthesis model
    pub speech: String,
    /// Speech model tried once when the primary attempt fails
    pub speech_fallback: String,
    /// Prebuilt voice name for speech synthesis
    pub voice: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            chat: "gemini-3-pro-preview".to_owned(),
            text: "gemini-2.5-flash".to_owned(),
            speech: "gemini-2.5-pro-tts".to_owned(),
            speech_fallback: "gemini-2.5-flash-preview-tts".to_owned(),
            voice: "Charon".to_owned(),
        }
    }
}

impl ModelsConfig {
    /// Names of fields that are blank
    pub(crate) fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("chat", &self.chat),
            ("text", &self.text),
            ("speech", &self.speech),
            ("speech_fallback", &self.speech_fallback),
            ("voice", &self.voice),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
