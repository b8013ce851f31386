pub mod audio;
mod client_utils;
mod errors;
pub mod google;
mod speech_model;
mod types;

pub use errors::*;
pub use speech_model::SpeechModel;
pub use types::*;
