use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    /// The audio payload is not valid standard base64 (bad alphabet or
    /// structurally invalid padding).
    #[error("Malformed audio payload: {0}")]
    MalformedPayload(#[from] base64::DecodeError),
    /// The channel configuration is unusable: zero channels, channels of
    /// differing lengths, or a channel count the WAV header cannot represent.
    #[error("Invalid channel configuration: {0}")]
    InvalidChannelConfiguration(String),
    /// The sample rate is not a positive number of frames per second.
    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(u32),
    /// The audio buffer contains no frames. Advisory: the WAV encoder accepts
    /// empty buffers, but a provider response that decodes to zero frames is
    /// reported with this.
    #[error("Audio buffer contains no frames")]
    EmptyBuffer,
    /// The input given to a provider call is invalid (e.g. a malformed
    /// header name in the options).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected (e.g. no candidates
    /// returned for a generation request).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type SpeechResult<T> = Result<T, SpeechError>;
