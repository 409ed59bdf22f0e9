//! Canonical 44-byte RIFF/WAVE framing for raw PCM

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, WavError};
use crate::params::AudioParameters;

/// Size of the canonical PCM WAV header
pub const HEADER_LEN: usize = 44;

/// Header bytes that follow the RIFF `ChunkSize` field
const RIFF_REMAINDER: u32 = 36;

/// `fmt ` sub-chunk body size for integer PCM
const FMT_CHUNK_LEN: u32 = 16;

/// `AudioFormat` tag for integer PCM
const FORMAT_PCM: u16 = 1;

/// Header fields after narrowing to their on-disk widths
struct HeaderFields {
    block_align: u16,
    byte_rate: u32,
    data_size: u32,
}

impl HeaderFields {
    fn new(params: &AudioParameters, data_len: usize) -> Result<Self> {
        params.validate()?;

        let block_align = u16::try_from(params.block_align())
            .map_err(|_| WavError::invalid("block_align", "exceeds 16 bits"))?;
        let byte_rate =
            u32::try_from(params.byte_rate()).map_err(|_| WavError::invalid("byte_rate", "exceeds 32 bits"))?;
        let data_size = u32::try_from(data_len)
            .ok()
            .filter(|size| size.checked_add(RIFF_REMAINDER).is_some())
            .ok_or(WavError::DataTooLarge(data_len))?;

        Ok(Self {
            block_align,
            byte_rate,
            data_size,
        })
    }
}

/// Wrap raw little-endian PCM in a WAV container
///
/// The output is the 44-byte header followed by `pcm` unchanged, so its
/// length is always `44 + pcm.len()`. Sample data is never interpreted,
/// and a length that is not a multiple of the block align is passed
/// through as-is.
///
/// # Errors
///
/// Returns [`WavError::InvalidParameter`] for parameters that cannot be
/// expressed in a PCM header and [`WavError::DataTooLarge`] when `pcm`
/// overflows the 32-bit size fields. Nothing is allocated on failure.
pub fn encode_wav(pcm: &[u8], params: AudioParameters) -> Result<Bytes> {
    let fields = HeaderFields::new(&params, pcm.len())?;

    let mut buf = BytesMut::with_capacity(HEADER_LEN + pcm.len());

    // RIFF header
    buf.put_slice(b"RIFF");
    buf.put_u32_le(RIFF_REMAINDER + fields.data_size);
    buf.put_slice(b"WAVE");

    // fmt sub-chunk
    buf.put_slice(b"fmt ");
    buf.put_u32_le(FMT_CHUNK_LEN);
    buf.put_u16_le(FORMAT_PCM);
    buf.put_u16_le(params.channel_count);
    buf.put_u32_le(params.sample_rate);
    buf.put_u32_le(fields.byte_rate);
    buf.put_u16_le(fields.block_align);
    buf.put_u16_le(params.bits_per_sample);

    // data sub-chunk
    buf.put_slice(b"data");
    buf.put_u32_le(fields.data_size);
    debug_assert_eq!(buf.len(), HEADER_LEN);

    buf.put_slice(pcm);

    Ok(buf.freeze())
}
