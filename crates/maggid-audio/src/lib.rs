//! Audio framing for Maggid speech responses
//!
//! Wraps the headerless linear PCM returned by Gemini speech models in a
//! canonical WAV container that any standard decoder can play.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
pub mod mime;
mod params;
pub mod wav;

pub use error::{Result, WavError};
pub use mime::{WAV_MIME, is_raw_pcm, pcm_parameters};
pub use params::AudioParameters;
pub use wav::{HEADER_LEN, encode_wav};
