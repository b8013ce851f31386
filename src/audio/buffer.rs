use crate::{SpeechError, SpeechResult};

/// In-memory audio: normalized samples in `[-1.0, 1.0]`, one `Vec<f32>` per
/// channel, all channels the same length.
///
/// A buffer is validated on construction and immutable afterwards, so every
/// consumer can rely on the invariants (positive sample rate, at least one
/// channel, uniform channel lengths) without re-checking them.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Builds a buffer from per-channel sample data.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::InvalidSampleRate`] if `sample_rate` is zero,
    /// and [`SpeechError::InvalidChannelConfiguration`] if `channels` is
    /// empty or the channels differ in length.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> SpeechResult<Self> {
        if sample_rate == 0 {
            return Err(SpeechError::InvalidSampleRate(sample_rate));
        }
        let Some(first) = channels.first() else {
            return Err(SpeechError::InvalidChannelConfiguration(
                "at least one channel is required".to_string(),
            ));
        };
        let frame_count = first.len();
        if channels.iter().any(|c| c.len() != frame_count) {
            return Err(SpeechError::InvalidChannelConfiguration(format!(
                "all channels must have the same length, got {:?}",
                channels.iter().map(Vec::len).collect::<Vec<_>>()
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Builds a single-channel buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_channels`].
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> SpeechResult<Self> {
        Self::from_channels(sample_rate, vec![samples])
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (one sample per channel) in the buffer.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    #[must_use]
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Samples of a single channel, if it exists.
    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }
}

/// An encoded 16-bit PCM WAV file: a 44-byte RIFF/WAVE header immediately
/// followed by interleaved little-endian sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    bytes: Vec<u8>,
}

impl WavFile {
    /// Length of the canonical RIFF/WAVE header preceding the sample data.
    pub const HEADER_LEN: usize = 44;

    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() >= Self::HEADER_LEN);
        Self { bytes }
    }

    /// The complete file, header included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the file, yielding its bytes for writing or upload.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The raw interleaved PCM sample data following the header.
    #[must_use]
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[Self::HEADER_LEN..]
    }

    /// Total file length in bytes (always at least [`Self::HEADER_LEN`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // A structurally valid WAV file is never zero bytes; "empty" means
        // the data section holds no samples.
        self.bytes.len() == Self::HEADER_LEN
    }
}
