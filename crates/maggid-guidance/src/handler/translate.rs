use maggid_gemini::{GenerateContentRequest, GenerationConfig};

use super::{Guidance, required};
use crate::error::{GuidanceError, Result};
use crate::types::{Direction, TranslateRequest, TranslateResponse};
use crate::{prompt, shaping};

impl Guidance {
    /// Translate between Hebrew and English
    pub async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
        let text = required(request.text, "Text is required")?;
        let direction = Direction::from_request(request.direction.as_deref());

        let wire = GenerateContentRequest::prompt(prompt::translate(direction, &text))
            .with_config(GenerationConfig::text(0.3, 512));

        tracing::debug!(model = %self.models.text, direction = ?direction, "translation");

        let response = self
            .generator
            .generate(&self.models.text, &wire)
            .await
            .map_err(GuidanceError::api)?;

        Ok(TranslateResponse {
            direction: request.direction,
            result: shaping::parse_or_wrap(response.first_text().unwrap_or_default(), "translation"),
        })
    }
}
