use super::api::{
    Blob, Content, GenerateContentParameters, GenerateContentResponse, GenerationConfig,
    Part as GooglePart, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
use crate::{
    audio::{self, AudioBuffer},
    client_utils, RefineOperation, SpeechError, SpeechModel, SpeechRequest, SpeechResult,
    SpellingReport, TranscriptionRequest,
};
use base64::Engine as _;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

const PROVIDER: &str = "google";

const DEFAULT_TEXT_MODEL_ID: &str = "gemini-2.5-flash";
const DEFAULT_TTS_MODEL_ID: &str = "gemini-2.5-flash-preview-tts";

/// The TTS endpoint returns headerless 16-bit PCM at a fixed rate and
/// channel layout.
const TTS_SAMPLE_RATE: u32 = 24_000;
const TTS_CHANNEL_COUNT: usize = 1;

/// A [`SpeechModel`] backed by the Gemini `generateContent` API.
pub struct GoogleSpeechModel {
    text_model_id: String,
    tts_model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleSpeechOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    /// Model used for transcription, refinement and spelling checks.
    pub text_model_id: Option<String>,
    /// Model used for speech generation.
    pub tts_model_id: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleSpeechModel {
    #[must_use]
    pub fn new(options: GoogleSpeechOptions) -> Self {
        let GoogleSpeechOptions {
            api_key,
            base_url,
            text_model_id,
            tts_model_id,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            text_model_id: text_model_id.unwrap_or_else(|| DEFAULT_TEXT_MODEL_ID.to_string()),
            tts_model_id: tts_model_id.unwrap_or_else(|| DEFAULT_TTS_MODEL_ID.to_string()),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> SpeechResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                SpeechError::InvalidInput(format!("Invalid Google header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                SpeechError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    async fn generate_content(
        &self,
        model_id: &str,
        contents: Vec<Content>,
        generation_config: Option<GenerationConfig>,
    ) -> SpeechResult<GenerateContentResponse> {
        let params = GenerateContentParameters {
            model: model_id.to_string(),
            contents,
            generation_config,
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model_id, self.api_key
        );

        let headers = self.request_headers()?;
        client_utils::send_json(&self.client, &url, &params, headers).await
    }
}

fn user_content(parts: Vec<GooglePart>) -> Content {
    Content {
        parts: Some(parts),
        role: Some("user".to_string()),
    }
}

fn text_part(text: impl Into<String>) -> GooglePart {
    GooglePart {
        text: Some(text.into()),
        ..Default::default()
    }
}

/// Pulls the first part out of the first candidate, the slot where Gemini
/// places single-part responses.
fn first_part(response: GenerateContentResponse) -> SpeechResult<GooglePart> {
    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| {
            SpeechError::Invariant(PROVIDER, "No candidate in response".to_string())
        })?;

    candidate
        .content
        .and_then(|c| c.parts)
        .and_then(|parts| parts.into_iter().next())
        .ok_or_else(|| SpeechError::Invariant(PROVIDER, "No part in candidate".to_string()))
}

fn first_text(response: GenerateContentResponse) -> SpeechResult<String> {
    first_part(response)?.text.ok_or_else(|| {
        SpeechError::Invariant(PROVIDER, "No text part in candidate".to_string())
    })
}

#[async_trait::async_trait]
impl SpeechModel for GoogleSpeechModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn generate_speech(&self, request: SpeechRequest) -> SpeechResult<AudioBuffer> {
        let prompt = match request.style.instruction() {
            Some(instruction) => format!("{instruction}\n\nText: \"{}\"", request.text),
            None => request.text,
        };

        debug!(
            provider = PROVIDER,
            model = %self.tts_model_id,
            voice = request.voice.as_str(),
            prompt_len = prompt.len(),
            "generating speech"
        );

        let generation_config = GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig {
                voice_config: Some(VoiceConfig {
                    prebuilt_voice_config: Some(PrebuiltVoiceConfig {
                        voice_name: Some(request.voice.as_str().to_string()),
                    }),
                }),
            }),
            ..Default::default()
        };

        let response = self
            .generate_content(
                &self.tts_model_id,
                vec![user_content(vec![text_part(prompt)])],
                Some(generation_config),
            )
            .await?;

        let payload = first_part(response)?
            .inline_data
            .and_then(|blob| blob.data)
            .ok_or_else(|| {
                SpeechError::Invariant(PROVIDER, "No audio data in candidate".to_string())
            })?;

        let buffer = audio::decode_base64_pcm(&payload, TTS_SAMPLE_RATE, TTS_CHANNEL_COUNT)?;
        if buffer.is_empty() {
            return Err(SpeechError::EmptyBuffer);
        }

        debug!(
            provider = PROVIDER,
            frames = buffer.frame_count(),
            "speech generated"
        );
        Ok(buffer)
    }

    async fn transcribe(&self, request: TranscriptionRequest) -> SpeechResult<String> {
        debug!(
            provider = PROVIDER,
            model = %self.text_model_id,
            mime_type = %request.mime_type,
            audio_len = request.audio.len(),
            "transcribing audio"
        );

        let blob_part = GooglePart {
            inline_data: Some(Blob {
                data: Some(base64::engine::general_purpose::STANDARD.encode(&request.audio)),
                mime_type: Some(request.mime_type),
            }),
            ..Default::default()
        };
        let instruction = text_part(
            "Listen to this audio and write down its content verbatim. Ignore \
             background sounds and noise. Return only the transcript, without \
             any preamble.",
        );

        let response = self
            .generate_content(
                &self.text_model_id,
                vec![user_content(vec![blob_part, instruction])],
                None,
            )
            .await?;

        first_text(response)
    }

    async fn refine_text(&self, text: &str, operation: RefineOperation) -> SpeechResult<String> {
        let prompt = match operation {
            RefineOperation::FixSpelling => format!(
                "Check the following text for spelling and grammar errors. Fix \
                 only the errors, preserving the original meaning and tone. \
                 Return the corrected text. Text: \"{text}\""
            ),
            RefineOperation::Rewrite => format!(
                "Rewrite the following text to be clearer, more fluent and \
                 more professional. Preserve the main idea. Return the \
                 rewritten text. Text: \"{text}\""
            ),
        };

        debug!(
            provider = PROVIDER,
            model = %self.text_model_id,
            ?operation,
            text_len = text.len(),
            "refining text"
        );

        let response = self
            .generate_content(
                &self.text_model_id,
                vec![user_content(vec![text_part(prompt)])],
                None,
            )
            .await?;

        first_text(response)
    }

    async fn check_spelling(&self, text: &str) -> SpeechResult<SpellingReport> {
        let prompt = format!(
            "Check the following text for spelling and grammar errors: \
             \"{text}\". If there are errors, correct them. If there are none, \
             or the flagged words are proper nouns, keep the text unchanged. \
             Return the result as JSON."
        );

        let generation_config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(json!({
                "type": "OBJECT",
                "properties": {
                    "hasErrors": {
                        "type": "BOOLEAN",
                        "description": "True if a serious spelling or grammar error was found."
                    },
                    "correctedText": {
                        "type": "STRING",
                        "description": "The corrected text."
                    },
                    "explanation": {
                        "type": "STRING",
                        "description": "A short explanation of the corrections, if any."
                    }
                },
                "required": ["hasErrors", "correctedText", "explanation"]
            })),
            ..Default::default()
        };

        debug!(
            provider = PROVIDER,
            model = %self.text_model_id,
            text_len = text.len(),
            "checking spelling"
        );

        let response = self
            .generate_content(
                &self.text_model_id,
                vec![user_content(vec![text_part(prompt)])],
                Some(generation_config),
            )
            .await?;

        let raw = first_text(response)?;
        serde_json::from_str(&raw).map_err(|e| {
            SpeechError::Invariant(PROVIDER, format!("Failed to parse spelling report: {e}"))
        })
    }
}
