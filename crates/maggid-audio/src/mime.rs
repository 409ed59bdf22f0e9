//! Recognise raw PCM MIME types and recover their sampling parameters

use crate::params::AudioParameters;

/// MIME type of the container produced by [`crate::encode_wav`]
pub const WAV_MIME: &str = "audio/wav";

/// Whether an upstream audio MIME type denotes headerless linear PCM
///
/// Matches `audio/L16`, `audio/pcm` and variants carrying parameters,
/// case-insensitively.
pub fn is_raw_pcm(mime: &str) -> bool {
    let lower = mime.to_ascii_lowercase();
    lower.contains("l16") || lower.contains("pcm")
}

/// Sampling parameters declared by a PCM MIME type
///
/// Reads the bit depth from an `L<bits>` subtype and the `rate` and
/// `channels` parameters, e.g. `audio/L16;codec=pcm;rate=24000`. Each field
/// that is absent or unparseable keeps its value from `fallback`.
pub fn pcm_parameters(mime: &str, fallback: AudioParameters) -> AudioParameters {
    let mut params = fallback;
    let mut segments = mime.split(';').map(str::trim);

    if let Some(bits) = segments
        .next()
        .and_then(|essence| essence.split_once('/'))
        .and_then(|(_, subtype)| subtype.strip_prefix(['L', 'l']))
        .and_then(|bits| bits.parse::<u16>().ok())
    {
        params.bits_per_sample = bits;
    }

    for segment in segments {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');

        match key.trim().to_ascii_lowercase().as_str() {
            "rate" => {
                if let Ok(rate) = value.parse() {
                    params.sample_rate = rate;
                }
            }
            "channels" => {
                if let Ok(channels) = value.parse() {
                    params.channel_count = channels;
                }
            }
            _ => {}
        }
    }

    if params.sample_rate != fallback.sample_rate {
        tracing::debug!(
            declared = params.sample_rate,
            configured = fallback.sample_rate,
            "upstream sample rate differs from configured default"
        );
    }

    params
}
