use maggid_gemini::{GenerateContentRequest, GenerationConfig};

use super::{Guidance, required};
use crate::error::{GuidanceError, Result};
use crate::prompt;
use crate::types::{ChatRequest, ChatResponse};

/// Reply used when the model answers with no text
const EMPTY_REPLY: &str = "Oy, something went wrong. Please try again, my friend.";

impl Guidance {
    /// Answer a chat message in the rabbi persona, with search grounding
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let message = required(request.message, "Message is required")?;
        let history = request.conversation_history.unwrap_or_default();

        let wire = GenerateContentRequest {
            contents: prompt::rabbi_conversation(&history, &message),
            ..GenerateContentRequest::default()
        }
        .with_config(GenerationConfig {
            top_k: Some(40),
            top_p: Some(0.95),
            ..GenerationConfig::text(0.8, 2048)
        })
        .with_google_search();

        tracing::debug!(model = %self.models.chat, history = history.len(), "rabbi chat");

        let response = self
            .generator
            .generate(&self.models.chat, &wire)
            .await
            .map_err(GuidanceError::rabbi)?;

        let text = response
            .first_text()
            .filter(|text| !text.is_empty())
            .unwrap_or(EMPTY_REPLY)
            .to_owned();

        Ok(ChatResponse {
            response: text,
            grounding_metadata: response.grounding_metadata().cloned(),
        })
    }
}
