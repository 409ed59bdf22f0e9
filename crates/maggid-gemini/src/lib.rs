//! Client for the Google Generative Language `generateContent` endpoint

#![allow(clippy::must_use_candidate)]

mod client;
mod error;
mod http_client;
pub mod protocol;

pub use client::{ContentGenerator, DEFAULT_BASE_URL, GeminiClient};
pub use error::{GeminiError, Result};
pub use protocol::*;
