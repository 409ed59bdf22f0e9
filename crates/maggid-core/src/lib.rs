//! Shared types for Maggid feature crates

#![allow(clippy::must_use_candidate)]

mod error;

pub use error::{ErrorEnvelope, HttpError};
