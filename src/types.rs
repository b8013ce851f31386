use serde::{Deserialize, Serialize};

/// Prebuilt voices offered by the speech provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    Puck,
    Charon,
    Kore,
    Fenrir,
    Zephyr,
}

impl Voice {
    /// The provider-side voice identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Puck => "Puck",
            Self::Charon => "Charon",
            Self::Kore => "Kore",
            Self::Fenrir => "Fenrir",
            Self::Zephyr => "Zephyr",
        }
    }
}

/// Delivery style for generated speech. Each style maps to an instruction
/// prepended to the prompt; [`VoiceStyle::Normal`] sends the text as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceStyle {
    #[default]
    Normal,
    News,
    Storytelling,
    Upbeat,
    Professional,
}

impl VoiceStyle {
    /// The style instruction for the prompt, if the style carries one.
    #[must_use]
    pub fn instruction(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::News => Some(
                "Read the following text like a news anchor: serious, clear, \
                 professionally paced with measured pauses.",
            ),
            Self::Storytelling => Some(
                "Read the following text like a storyteller: emotive, warm, \
                 engaging and expressive.",
            ),
            Self::Upbeat => Some(
                "Read the following text like an advertisement: cheerful, \
                 enthusiastic, energetic and inviting.",
            ),
            Self::Professional => Some(
                "Read the following text like a presenter: confident, \
                 composed, persuasive and articulate.",
            ),
        }
    }
}

/// A text-to-speech request.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// The text to speak.
    pub text: String,
    /// The prebuilt voice to speak with.
    pub voice: Voice,
    /// The delivery style.
    pub style: VoiceStyle,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            voice,
            style: VoiceStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: VoiceStyle) -> Self {
        self.style = style;
        self
    }
}

/// A speech-to-text request.
///
/// Captured audio is an opaque container blob whose format is negotiated by
/// the capture environment; the provider decodes it server-side. Only the
/// MIME type travels alongside the bytes.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// The audio container bytes, as captured.
    pub audio: Vec<u8>,
    /// The IANA MIME type of the audio container, e.g. `audio/webm`.
    pub mime_type: String,
}

impl TranscriptionRequest {
    pub fn new(audio: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            audio,
            mime_type: mime_type.into(),
        }
    }
}

/// The kind of revision to apply to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefineOperation {
    /// Correct spelling and grammar only, preserving meaning and tone.
    FixSpelling,
    /// Rewrite for flow and concision, preserving the main idea.
    Rewrite,
}

/// Result of a spelling and grammar check, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingReport {
    /// Whether any serious spelling or grammar error was found.
    pub has_errors: bool,
    /// The corrected text; equals the input when nothing needed fixing.
    pub corrected_text: String,
    /// A short explanation of the corrections, empty when there are none.
    pub explanation: String,
}
