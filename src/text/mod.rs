//! Transcript chunking for the correction pass.

pub mod splitter;

pub use splitter::TextSplitter;
