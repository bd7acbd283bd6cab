//! In-memory audio encoding.

use crate::audio::segmenter::AudioSegment;
use crate::error::{KikitoriError, Result};
use std::io::Cursor;

/// Target container/codec for an encoded segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodecFormat {
    /// 16-bit PCM WAV.
    #[default]
    Wav,
}

impl CodecFormat {
    /// File extension used in upload file names.
    pub fn extension(&self) -> &'static str {
        match self {
            CodecFormat::Wav => "wav",
        }
    }

    /// MIME type for the upload form part.
    pub fn mime_type(&self) -> &'static str {
        match self {
            CodecFormat::Wav => "audio/wav",
        }
    }
}

/// MIME type for an upload, guessed from the file name's extension.
///
/// Unsegmented inputs are uploaded under their original name, which may be
/// any container the transcription service accepts.
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") | Some("mp4") => "audio/mp4",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Serialize a segment into an encoded byte buffer.
///
/// Pure transform: the only output is the returned buffer. The encoded size
/// is not re-checked against any upload ceiling here.
pub fn encode_segment(segment: &AudioSegment, format: CodecFormat) -> Result<Vec<u8>> {
    match format {
        CodecFormat::Wav => encode_wav(segment),
    }
}

fn encode_wav(segment: &AudioSegment) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: segment.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer =
        hound::WavWriter::new(&mut cursor, spec).map_err(|e| KikitoriError::Encoding {
            message: format!("Failed to start WAV stream: {}", e),
        })?;
    for &sample in segment.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| KikitoriError::Encoding {
                message: format!("Failed to write WAV sample: {}", e),
            })?;
    }
    writer.finalize().map_err(|e| KikitoriError::Encoding {
        message: format!("Failed to finalize WAV stream: {}", e),
    })?;

    Ok(cursor.into_inner())
}
