//! Error types for kikitori.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KikitoriError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    // Audio errors
    #[error("Audio contains no transcribable fragments (silence detection found nothing)")]
    EmptyAudio,

    #[error("Failed to decode audio: {message}")]
    AudioDecode { message: String },

    #[error("Failed to encode audio segment: {message}")]
    Encoding { message: String },

    // Service errors
    #[error("Transcription request failed: {message}")]
    Transcription { message: String },

    #[error("Correction request failed: {message}")]
    Correction { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, KikitoriError>;
