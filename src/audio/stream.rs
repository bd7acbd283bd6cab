//! In-memory decoded audio.

use crate::error::{KikitoriError, Result};
use std::io::Read;
use std::time::Duration;

/// Decoded audio: mono 16-bit PCM at a known sample rate.
///
/// Created once per input file and never mutated afterwards. Multi-channel
/// input is downmixed during decoding; float and high-bit-depth samples are
/// converted to i16.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioStream {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioStream {
    /// Wrap raw mono samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be non-zero");
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decode a WAV byte buffer.
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_wav_reader(std::io::Cursor::new(bytes))
    }

    /// Decode WAV data from any reader.
    pub fn from_wav_reader(reader: impl Read) -> Result<Self> {
        let mut wav_reader =
            hound::WavReader::new(reader).map_err(|e| KikitoriError::AudioDecode {
                message: format!("Failed to parse WAV data: {}", e),
            })?;

        let spec = wav_reader.spec();
        let channels = spec.channels as usize;
        if channels == 0 {
            return Err(KikitoriError::AudioDecode {
                message: "WAV header declares zero channels".to_string(),
            });
        }

        let read_err = |e: hound::Error| KikitoriError::AudioDecode {
            message: format!("Failed to read WAV samples: {}", e),
        };

        let raw_samples: Vec<i16> = match spec.sample_format {
            hound::SampleFormat::Int if spec.bits_per_sample <= 16 => wav_reader
                .samples::<i16>()
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(read_err)?,
            hound::SampleFormat::Int => {
                // 24/32-bit integer samples: keep the top 16 bits
                let shift = spec.bits_per_sample - 16;
                wav_reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| (v >> shift) as i16))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(read_err)?
            }
            hound::SampleFormat::Float => wav_reader
                .samples::<f32>()
                .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(read_err)?,
        };

        // Downmix to mono by averaging channels
        let samples = if channels == 1 {
            raw_samples
        } else {
            raw_samples
                .chunks_exact(channels)
                .map(|frame| {
                    let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                    (sum / channels as i32) as i16
                })
                .collect()
        };

        Ok(Self::new(samples, spec.sample_rate))
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples in the stream.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total play time of the stream.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }

    /// Convert a millisecond offset into a sample count, rounding down.
    pub fn ms_to_samples(&self, ms: u64) -> usize {
        (ms as u128 * self.sample_rate as u128 / 1000) as usize
    }

    /// Copy out a sample range, clamped to the stream bounds.
    pub fn slice(&self, start: usize, end: usize) -> Vec<i16> {
        let end = end.min(self.samples.len());
        let start = start.min(end);
        self.samples[start..end].to_vec()
    }
}
