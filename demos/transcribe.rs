// Transcribes an audio file given on the command line.
use speech_sdk::{
    google::{GoogleSpeechModel, GoogleSpeechOptions},
    SpeechModel, TranscriptionRequest,
};
use std::path::Path;

fn guess_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mp3",
        Some("ogg") => "audio/ogg",
        Some("webm") => "audio/webm",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let model = GoogleSpeechModel::new(GoogleSpeechOptions {
        api_key: std::env::var("GOOGLE_API_KEY")
            .expect("GOOGLE_API_KEY environment variable must be set"),
        ..Default::default()
    });

    let path = std::env::args()
        .nth(1)
        .expect("usage: transcribe <audio file>");
    let path = Path::new(&path);
    let audio = std::fs::read(path).expect("failed to read audio file");

    let transcript = model
        .transcribe(TranscriptionRequest::new(audio, guess_mime_type(path)))
        .await
        .expect("transcribe failed");

    println!("{transcript}");
}
