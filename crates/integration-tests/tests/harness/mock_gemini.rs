//! Mock Generative Language backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent` with a canned reply
//! and records every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// What the mock answers to every non-failing model
#[derive(Debug, Clone)]
pub enum Reply {
    /// One text part
    Text(String),
    /// One text part with grounding metadata on the candidate
    Grounded(String, Value),
    /// One inline audio part
    Audio { mime_type: String, data: String },
    /// A candidate without content
    Empty,
    /// An error status with a Google-style error body
    Error { status: u16, message: String },
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_owned())
    }

    pub fn audio(mime_type: &str, data: &str) -> Self {
        Self::Audio {
            mime_type: mime_type.to_owned(),
            data: data.to_owned(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::Error {
            status,
            message: message.to_owned(),
        }
    }
}

/// A request received by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub api_key: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    /// Text of the first part of the last content entry
    pub fn last_prompt(&self) -> &str {
        self.body["contents"]
            .as_array()
            .and_then(|contents| contents.last())
            .and_then(|content| content["parts"][0]["text"].as_str())
            .unwrap_or_default()
    }
}

/// Mock Gemini backend
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    request_count: AtomicU32,
    reply: Reply,
    /// Models that always answer 500
    failing_models: Vec<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockGemini {
    /// Start the mock server, returning immediately
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        Self::start_inner(reply, &[]).await
    }

    /// Start a mock server where the named models fail with 500
    pub async fn start_failing_models(reply: Reply, models: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(reply, models).await
    }

    async fn start_inner(reply: Reply, failing_models: &[&str]) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            request_count: AtomicU32::new(0),
            reply,
            failing_models: failing_models.iter().map(|m| (*m).to_owned()).collect(),
            requests: Mutex::default(),
        });

        let app = Router::new()
            .route("/v1beta/models/{target}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for `[gemini] base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of generateContent requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockGeminiState>>,
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(model) = target.strip_suffix(":generateContent") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.requests.lock().unwrap().push(RecordedRequest {
        model: model.to_owned(),
        api_key: query.get("key").cloned(),
        body,
    });

    if state.failing_models.iter().any(|failing| failing == model) {
        return error_response(500, &format!("mock failure for {model}"));
    }

    match &state.reply {
        Reply::Text(text) => Json(candidate(json!({ "role": "model", "parts": [{ "text": text }] }), None)).into_response(),
        Reply::Grounded(text, metadata) => Json(candidate(
            json!({ "role": "model", "parts": [{ "text": text }] }),
            Some(metadata.clone()),
        ))
        .into_response(),
        Reply::Audio { mime_type, data } => Json(candidate(
            json!({ "role": "model", "parts": [{ "inlineData": { "mimeType": mime_type, "data": data } }] }),
            None,
        ))
        .into_response(),
        Reply::Empty => Json(json!({ "candidates": [{ "finishReason": "OTHER" }] })).into_response(),
        Reply::Error { status, message } => error_response(*status, message),
    }
}

fn candidate(content: Value, grounding_metadata: Option<Value>) -> Value {
    let mut candidate = json!({ "content": content, "finishReason": "STOP" });
    if let Some(metadata) = grounding_metadata {
        candidate["groundingMetadata"] = metadata;
    }

    json!({
        "candidates": [candidate],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 5, "totalTokenCount": 15 }
    })
}

fn error_response(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": { "code": status.as_u16(), "message": message, "status": "INTERNAL" }
        })),
    )
        .into_response()
}
