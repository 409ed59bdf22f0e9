use maggid_gemini::{GenerateContentRequest, GenerationConfig};
use serde_json::Value;

use super::Guidance;
use crate::error::{GuidanceError, Result};
use crate::types::RecommendRequest;
use crate::{prompt, shaping};

impl Guidance {
    /// Recommend pathways from quiz answers
    ///
    /// The parsed answer is returned as an object with the model name added.
    pub async fn recommend(&self, request: RecommendRequest) -> Result<Value> {
        let Some(Value::Array(answers)) = request.answers else {
            return Err(GuidanceError::InvalidRequest("Quiz answers array is required".to_owned()));
        };

        let wire = GenerateContentRequest::prompt(prompt::recommend(&answers))
            .with_config(GenerationConfig::text(0.7, 2048));

        tracing::debug!(model = %self.models.text, answers = answers.len(), "pathway recommendation");

        let response = self
            .generator
            .generate(&self.models.text, &wire)
            .await
            .map_err(GuidanceError::upstream)?;

        let mut result = shaping::parse_object(response.first_text().unwrap_or_default());
        result.insert("model".to_owned(), Value::String(self.models.text.clone()));

        Ok(Value::Object(result))
    }
}
