//! Post-transcription text correction.

pub mod chat_api;
pub mod corrector;
pub mod prompt;

pub use chat_api::ChatApiCorrector;
pub use corrector::{Corrector, MockCorrector};
pub use prompt::CorrectionPrompt;
