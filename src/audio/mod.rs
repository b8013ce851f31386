//! The audio codec boundary: raw provider payloads in, playable buffers and
//! downloadable WAV files out.
//!
//! Remote text-to-speech providers return base64-encoded raw 16-bit PCM with
//! no container. [`decode_base64_pcm`] turns such a payload into an
//! [`AudioBuffer`] of normalized samples; [`encode_wav`] serializes a buffer
//! into a canonical 16-bit PCM WAV file suitable for saving. All functions
//! here are pure and deterministic.

mod buffer;
mod pcm;
mod wav;

pub use buffer::{AudioBuffer, WavFile};
pub use pcm::{decode_base64, decode_base64_pcm, decode_pcm};
pub use wav::encode_wav;
