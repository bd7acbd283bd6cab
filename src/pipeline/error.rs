//! Error types for the transcription pipeline.

use crate::error::KikitoriError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Segment,
    Encode,
    Transcribe,
    Chunk,
    Correct,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Decode => "decode",
            Stage::Segment => "segment",
            Stage::Encode => "encode",
            Stage::Transcribe => "transcribe",
            Stage::Chunk => "chunk",
            Stage::Correct => "correct",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure annotated with the stage that produced it.
///
/// The first failing stage aborts the whole run, so a caller never receives
/// a partial transcript alongside one of these.
#[derive(Debug, Error)]
#[error("Pipeline failed at {stage} stage: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: KikitoriError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: KikitoriError) -> Self {
        Self { stage, source }
    }
}
