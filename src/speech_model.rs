use crate::{
    audio::AudioBuffer, RefineOperation, SpeechRequest, SpeechResult, SpellingReport,
    TranscriptionRequest,
};

/// A remote speech provider: text to speech, speech to text, and text
/// refinement behind one seam so hosts can swap providers or substitute a
/// test double.
#[async_trait::async_trait]
pub trait SpeechModel: Send + Sync {
    fn provider(&self) -> &'static str;

    /// Synthesizes speech for the request, returning a playable buffer.
    async fn generate_speech(&self, request: SpeechRequest) -> SpeechResult<AudioBuffer>;

    /// Transcribes a captured audio blob into text.
    async fn transcribe(&self, request: TranscriptionRequest) -> SpeechResult<String>;

    /// Revises a text according to the operation and returns the revision.
    async fn refine_text(&self, text: &str, operation: RefineOperation) -> SpeechResult<String>;

    /// Checks a text for spelling and grammar errors.
    async fn check_spelling(&self, text: &str) -> SpeechResult<SpellingReport>;
}
