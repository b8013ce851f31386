mod api;
mod model;

pub use model::{GoogleSpeechModel, GoogleSpeechOptions};
