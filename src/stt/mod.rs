//! Speech-to-text transcription adapters.

pub mod transcriber;
pub mod whisper_api;

pub use transcriber::{MockTranscriber, Transcriber};
pub use whisper_api::WhisperApiTranscriber;
