//! Audio decoding, silence detection, and segmentation.
//!
//! An input file is decoded once into an [`AudioStream`], cut at silence
//! boundaries into fragments, and the fragments are repacked into segments
//! that fit under the transcription service's upload ceiling.

pub mod encoder;
pub mod segmenter;
pub mod silence;
pub mod stream;

pub use encoder::{CodecFormat, encode_segment, mime_for_file_name};
pub use segmenter::{
    AudioFragment, AudioSegment, SegmentLimit, SilenceParams, extract_fragments, pack_fragments,
    segment,
};
pub use silence::{SilenceInterval, detect_nonsilent, detect_silence};
pub use stream::AudioStream;
