#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod handler;
mod prompt;
mod request;
mod shaping;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{MethodRouter, post},
};
use maggid_gemini::GeminiClient;
use serde_json::Value;

pub use error::{GuidanceError, Result};
pub use handler::{Guidance, SpeechAudio};
pub use request::{BODY_LIMIT_BYTES, ExtractPayload};
pub use types::*;

/// Build the guidance service from configuration
pub fn build_guidance(config: &maggid_config::Config) -> anyhow::Result<Arc<Guidance>> {
    let client = GeminiClient::new(&config.gemini)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Gemini client: {e}"))?;

    if !client.has_api_key() {
        tracing::debug!("Gemini client has no API key; guidance requests will be refused");
    }

    Ok(Arc::new(Guidance::new(
        Arc::new(client),
        config.models.clone(),
        config.audio,
    )))
}

/// Create the endpoint router for guidance operations under `prefix`
pub fn endpoint_router(prefix: &str) -> Router<Arc<Guidance>> {
    Router::new()
        .route(&format!("{prefix}/rabbi"), endpoint(post(rabbi)))
        .route(&format!("{prefix}/daily"), endpoint(post(daily)))
        .route(&format!("{prefix}/translate"), endpoint(post(translate)))
        .route(&format!("{prefix}/recommend"), endpoint(post(recommend)))
        .route(&format!("{prefix}/tts"), endpoint(post(speech)))
}

/// Reject every method other than POST
///
/// `OPTIONS` never reaches the endpoint, the CORS layer answers it.
fn endpoint(route: MethodRouter<Arc<Guidance>>) -> MethodRouter<Arc<Guidance>> {
    route.fallback(method_not_allowed)
}

async fn method_not_allowed() -> GuidanceError {
    GuidanceError::MethodNotAllowed
}

async fn rabbi(
    State(guidance): State<Arc<Guidance>>,
    ExtractPayload(request): ExtractPayload<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    Ok(Json(guidance.chat(request).await?))
}

async fn daily(
    State(guidance): State<Arc<Guidance>>,
    ExtractPayload(request): ExtractPayload<DailyRequest>,
) -> Result<Json<DailyResponse>> {
    Ok(Json(guidance.daily(request).await?))
}

async fn translate(
    State(guidance): State<Arc<Guidance>>,
    ExtractPayload(request): ExtractPayload<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    Ok(Json(guidance.translate(request).await?))
}

async fn recommend(
    State(guidance): State<Arc<Guidance>>,
    ExtractPayload(request): ExtractPayload<RecommendRequest>,
) -> Result<Json<Value>> {
    Ok(Json(guidance.recommend(request).await?))
}

async fn speech(
    State(guidance): State<Arc<Guidance>>,
    ExtractPayload(request): ExtractPayload<SpeechRequest>,
) -> Result<SpeechAudio> {
    let audio = guidance.speak(request).await?;

    tracing::debug!(mime_type = %audio.mime_type, bytes = audio.audio.len(), "speech synthesis complete");

    Ok(audio)
}
