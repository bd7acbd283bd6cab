//! Transcription pipeline from raw audio bytes to corrected text.
//!
//! Stages run in a fixed order: decode, silence segmentation, encoding,
//! transcription, chunking, correction. Remote stages can overlap requests
//! while the output keeps source order.

pub mod error;
pub mod orchestrator;

pub use error::{PipelineError, Stage};
pub use orchestrator::{Pipeline, PipelineOptions, Transcript};
