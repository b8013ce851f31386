use super::AudioBuffer;
use crate::{SpeechError, SpeechResult};
use base64::Engine as _;

/// Decodes a standard-alphabet base64 payload into raw bytes.
///
/// Round-trip faithful: decoding an encoded byte sequence reproduces it
/// exactly, for any length including zero.
///
/// # Errors
///
/// Returns [`SpeechError::MalformedPayload`] on characters outside the
/// standard base64 alphabet or structurally invalid padding.
pub fn decode_base64(payload: &str) -> SpeechResult<Vec<u8>> {
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

/// Decodes raw 16-bit little-endian signed PCM into a normalized
/// [`AudioBuffer`].
///
/// Samples are interleaved frame-major (channel 0, channel 1, ..., then the
/// next frame) and normalized by `s / 32768.0`, so values land in
/// `[-1.0, 1.0)`. A trailing partial frame is dropped silently: providers
/// occasionally return a few misaligned trailing bytes, and an incomplete
/// frame cannot be reconstructed.
///
/// # Errors
///
/// Returns [`SpeechError::InvalidChannelConfiguration`] if `channel_count`
/// is zero and [`SpeechError::InvalidSampleRate`] if `sample_rate` is zero.
pub fn decode_pcm(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: usize,
) -> SpeechResult<AudioBuffer> {
    if channel_count == 0 {
        return Err(SpeechError::InvalidChannelConfiguration(
            "at least one channel is required".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(SpeechError::InvalidSampleRate(sample_rate));
    }

    let frame_size = 2 * channel_count;
    let frame_count = bytes.len() / frame_size;
    let mut channels = vec![Vec::with_capacity(frame_count); channel_count];
    for frame in bytes.chunks_exact(frame_size) {
        for (channel, sample) in channels.iter_mut().zip(frame.chunks_exact(2)) {
            let s = i16::from_le_bytes([sample[0], sample[1]]);
            channel.push(f32::from(s) / 32768.0);
        }
    }

    AudioBuffer::from_channels(sample_rate, channels)
}

/// Decodes a base64-encoded raw PCM payload, as returned by remote
/// text-to-speech providers, into an [`AudioBuffer`].
///
/// # Errors
///
/// Propagates the errors of [`decode_base64`] and [`decode_pcm`].
pub fn decode_base64_pcm(
    payload: &str,
    sample_rate: u32,
    channel_count: usize,
) -> SpeechResult<AudioBuffer> {
    let bytes = decode_base64(payload)?;
    decode_pcm(&bytes, sample_rate, channel_count)
}
