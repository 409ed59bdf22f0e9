use std::str::FromStr;

use maggid_gemini::{GenerateContentRequest, GenerationConfig};

use super::Guidance;
use crate::error::{GuidanceError, Result};
use crate::types::{DailyKind, DailyRequest, DailyResponse};
use crate::{prompt, shaping};

impl Guidance {
    /// Daily blessing, verse or pathway suggestion
    pub async fn daily(&self, request: DailyRequest) -> Result<DailyResponse> {
        let kind = request
            .kind
            .as_deref()
            .and_then(|kind| DailyKind::from_str(kind).ok())
            .ok_or_else(|| GuidanceError::InvalidRequest("Invalid type. Use: blessing, verse, or pathway".to_owned()))?;

        let wire = GenerateContentRequest::prompt(prompt::daily(kind)).with_config(GenerationConfig::text(0.9, 512));

        tracing::debug!(model = %self.models.text, kind = %kind, "daily inspiration");

        let response = self
            .generator
            .generate(&self.models.text, &wire)
            .await
            .map_err(GuidanceError::api)?;

        Ok(DailyResponse {
            kind,
            data: shaping::parse_or_wrap(response.first_text().unwrap_or_default(), "raw"),
        })
    }
}
