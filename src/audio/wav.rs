use super::{AudioBuffer, WavFile};
use crate::{SpeechError, SpeechResult};

/// Serializes an [`AudioBuffer`] into a canonical 16-bit PCM WAV file.
///
/// Samples are clamped to `[-1.0, 1.0]`, quantized to 16-bit signed
/// integers, and written little-endian in frame-major interleaved order
/// behind the 44-byte RIFF/WAVE header. The output is fully determined by
/// the input; encoding the same buffer twice yields byte-identical files.
///
/// An empty buffer encodes to a valid 44-byte file with a zero-length data
/// chunk. Zero-length audio is a degenerate case, not an error.
///
/// # Errors
///
/// Returns [`SpeechError::InvalidChannelConfiguration`] if the channel
/// count does not fit the header's 16-bit field.
pub fn encode_wav(buffer: &AudioBuffer) -> SpeechResult<WavFile> {
    let channel_count = u16::try_from(buffer.channel_count()).map_err(|_| {
        SpeechError::InvalidChannelConfiguration(format!(
            "channel count {} exceeds the WAV limit of {}",
            buffer.channel_count(),
            u16::MAX
        ))
    })?;

    let sample_rate = buffer.sample_rate();
    let frame_count = buffer.frame_count();
    let block_align = u32::from(channel_count) * 2;
    let byte_rate = sample_rate * block_align;
    #[allow(clippy::cast_possible_truncation)]
    let data_size = (frame_count as u32) * block_align;

    let mut bytes = Vec::with_capacity(WavFile::HEADER_LEN + data_size as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&channel_count.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    #[allow(clippy::cast_possible_truncation)]
    bytes.extend_from_slice(&(block_align as u16).to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());

    for frame in 0..frame_count {
        for channel in buffer.channels() {
            bytes.extend_from_slice(&quantize(channel[frame]).to_le_bytes());
        }
    }

    Ok(WavFile::from_bytes(bytes))
}

/// Clamps to `[-1.0, 1.0]` and scales to the 16-bit signed range.
///
/// The scale is asymmetric: -1.0 maps to -32768 and 1.0 to 32767, the
/// convention external WAV players expect. Clamping before scaling keeps
/// out-of-range samples from wrapping around.
#[allow(clippy::cast_possible_truncation)]
fn quantize(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0).round() as i16
    } else {
        (s * 32767.0).round() as i16
    }
}
