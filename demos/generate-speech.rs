// Generates speech for a sentence and saves it as speech.wav.
use speech_sdk::{
    audio,
    google::{GoogleSpeechModel, GoogleSpeechOptions},
    SpeechModel, SpeechRequest, SpellingReport, Voice, VoiceStyle,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let model = GoogleSpeechModel::new(GoogleSpeechOptions {
        api_key: std::env::var("GOOGLE_API_KEY")
            .expect("GOOGLE_API_KEY environment variable must be set"),
        ..Default::default()
    });

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Welcome to the speech SDK demo.".to_string());

    // A failed spelling check should not block synthesis; fall back to the
    // original text.
    let report = model
        .check_spelling(&text)
        .await
        .unwrap_or_else(|_| SpellingReport {
            has_errors: false,
            corrected_text: text.clone(),
            explanation: String::new(),
        });
    if report.has_errors {
        println!("corrected: {}", report.corrected_text);
        println!("({})", report.explanation);
    }

    let buffer = model
        .generate_speech(
            SpeechRequest::new(report.corrected_text, Voice::Kore)
                .with_style(VoiceStyle::Storytelling),
        )
        .await
        .expect("generate_speech failed");

    println!(
        "generated {} frames at {} Hz",
        buffer.frame_count(),
        buffer.sample_rate()
    );

    let wav = audio::encode_wav(&buffer).expect("encode_wav failed");
    std::fs::write("speech.wav", wav.as_bytes()).expect("failed to write speech.wav");
    println!("wrote speech.wav ({} bytes)", wav.len());
}
