use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

// -- rabbi --

/// Chat turn from the client, passed through verbatim
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryTurn {
    /// `"user"` for the client, anything else is the model
    #[serde(default)]
    pub role: String,
    /// Turn text
    #[serde(default)]
    pub content: String,
}

/// Chat request for the rabbi persona
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// New user message
    #[serde(default)]
    pub message: Option<String>,
    /// Earlier turns, oldest first
    #[serde(default)]
    pub conversation_history: Option<Vec<HistoryTurn>>,
}

/// Rabbi reply
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    /// Search grounding metadata, when the model searched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<Value>,
}

// -- daily --

/// Kind of daily inspiration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DailyKind {
    Blessing,
    Verse,
    Pathway,
}

#[derive(Debug, Default, Deserialize)]
pub struct DailyRequest {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyResponse {
    #[serde(rename = "type")]
    pub kind: DailyKind,
    pub data: Value,
}

// -- translate --

#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// `toHebrew` / `en-to-he` for English to Hebrew, anything else the reverse
    #[serde(default)]
    pub direction: Option<String>,
}

/// Translation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EnglishToHebrew,
    HebrewToEnglish,
}

impl Direction {
    pub fn from_request(direction: Option<&str>) -> Self {
        match direction {
            Some("toHebrew" | "en-to-he") => Self::EnglishToHebrew,
            _ => Self::HebrewToEnglish,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Direction as sent by the client, `null` when absent
    pub direction: Option<String>,
    pub result: Value,
}

// -- recommend --

#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    /// Quiz answers, each `{"question": ..., "answer": ...}`
    #[serde(default)]
    pub answers: Option<Value>,
}

// -- tts --

/// Output encoding of synthesized speech
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechFormat {
    /// `{"audio": base64, "mimeType": ...}`
    #[default]
    Json,
    /// Binary body typed with the audio MIME type
    Wav,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// `he` selects the Israeli-accent style
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub format: SpeechFormat,
}

/// JSON body for synthesized speech
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechBody {
    /// Base64-encoded audio
    pub audio: String,
    pub mime_type: String,
}
