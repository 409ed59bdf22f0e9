use serde::Deserialize;

use crate::error::{Result, WavError};

/// Shape of interleaved linear PCM sample data
///
/// `block_align` and `byte_rate` are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioParameters {
    /// Samples per second per channel
    pub sample_rate: u32,
    /// Bits per sample, a multiple of 8
    pub bits_per_sample: u16,
    /// Number of interleaved channels
    #[serde(alias = "channels")]
    pub channel_count: u16,
}

impl AudioParameters {
    /// 24 kHz, 16-bit, mono: the layout Gemini speech models emit
    pub const SPEECH_DEFAULT: Self = Self::new(24_000, 16, 1);

    pub const fn new(sample_rate: u32, bits_per_sample: u16, channel_count: u16) -> Self {
        Self {
            sample_rate,
            bits_per_sample,
            channel_count,
        }
    }

    /// Bytes per sample frame across all channels
    pub fn block_align(&self) -> u32 {
        u32::from(self.channel_count) * (u32::from(self.bits_per_sample) / 8)
    }

    /// Bytes of sample data consumed per second of playback
    pub fn byte_rate(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.block_align())
    }

    /// Duration of `data_len` bytes of audio in this layout, in milliseconds
    ///
    /// Returns 0 when the parameters are degenerate.
    pub fn duration_millis(&self, data_len: usize) -> u64 {
        let byte_rate = self.byte_rate();
        if byte_rate == 0 {
            return 0;
        }
        (data_len as u64).saturating_mul(1000) / byte_rate
    }

    /// Check the parameters describe a representable PCM layout
    ///
    /// # Errors
    ///
    /// Returns [`WavError::InvalidParameter`] when any field is zero, when
    /// `bits_per_sample` is not a whole number of bytes, or when a derived
    /// field does not fit its fixed-width header slot.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WavError::invalid("sample_rate", "must be greater than zero"));
        }
        if self.bits_per_sample == 0 {
            return Err(WavError::invalid("bits_per_sample", "must be greater than zero"));
        }
        if self.bits_per_sample % 8 != 0 {
            return Err(WavError::invalid("bits_per_sample", "must be a multiple of 8"));
        }
        if self.channel_count == 0 {
            return Err(WavError::invalid("channel_count", "must be greater than zero"));
        }
        if u16::try_from(self.block_align()).is_err() {
            return Err(WavError::invalid("block_align", "exceeds 16 bits"));
        }
        if u32::try_from(self.byte_rate()).is_err() {
            return Err(WavError::invalid("byte_rate", "exceeds 32 bits"));
        }
        Ok(())
    }
}

impl Default for AudioParameters {
    fn default() -> Self {
        Self::SPEECH_DEFAULT
    }
}
