use thiserror::Error;

pub type Result<T> = std::result::Result<T, WavError>;

/// Failures raised before any WAV output is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WavError {
    /// A sampling parameter cannot be represented in a PCM header
    #[error("invalid audio parameter {field}: {reason}")]
    InvalidParameter {
        /// Offending field name
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Sample data does not fit the 32-bit RIFF size fields
    #[error("audio data too large for a WAV container: {0} bytes")]
    DataTooLarge(usize),
}

impl WavError {
    pub(crate) const fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { field, reason }
    }
}
