//! Silence-based audio segmentation.
//!
//! Cuts a stream into fragments at silence boundaries, then greedily repacks
//! consecutive fragments into segments that fit under a size ceiling. Order
//! is never changed: concatenating the emitted segments reproduces the
//! fragment sequence exactly.

use crate::audio::silence::detect_nonsilent;
use crate::audio::stream::AudioStream;
use crate::defaults;
use crate::error::{KikitoriError, Result};
use std::time::Duration;

/// Silence-detection parameters for segmentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilenceParams {
    /// Minimum quiet span that counts as a cut point, in milliseconds.
    pub min_silence_len_ms: u32,
    /// RMS level (dBFS) at or below which a window is silent.
    pub silence_thresh_db: f32,
    /// Silence retained on each side of a fragment, in milliseconds.
    pub keep_silence_ms: u32,
}

impl Default for SilenceParams {
    fn default() -> Self {
        Self {
            min_silence_len_ms: defaults::MIN_SILENCE_LEN_MS,
            silence_thresh_db: defaults::SILENCE_THRESH_DB,
            keep_silence_ms: defaults::KEEP_SILENCE_MS,
        }
    }
}

/// Ceiling on the size of a packed segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentLimit {
    /// Maximum estimated PCM payload in bytes.
    Bytes(u64),
    /// Maximum play time.
    Duration(Duration),
}

impl SegmentLimit {
    /// Measure a sample count in this limit's unit (bytes or milliseconds).
    fn measure(&self, samples: usize, sample_rate: u32) -> u64 {
        match self {
            SegmentLimit::Bytes(_) => samples as u64 * 2,
            SegmentLimit::Duration(_) => samples as u64 * 1000 / u64::from(sample_rate),
        }
    }

    fn ceiling(&self) -> u64 {
        match self {
            SegmentLimit::Bytes(bytes) => *bytes,
            SegmentLimit::Duration(duration) => duration.as_millis() as u64,
        }
    }
}

/// A contiguous run of non-silent audio cut from the source stream.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFragment {
    samples: Vec<i16>,
    sample_rate: u32,
    source_offset: usize,
}

impl AudioFragment {
    pub fn new(samples: Vec<i16>, sample_rate: u32, source_offset: usize) -> Self {
        Self {
            samples,
            sample_rate,
            source_offset,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Offset of this fragment's first sample in the source stream.
    pub fn source_offset(&self) -> usize {
        self.source_offset
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }

    /// Estimated raw PCM payload of this fragment.
    pub fn pcm_byte_len(&self) -> u64 {
        self.samples.len() as u64 * 2
    }
}

/// One or more consecutive fragments merged under the size ceiling.
///
/// The unit handed to the encoder and then to transcription.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<i16>,
    sample_rate: u32,
    fragment_count: usize,
}

impl AudioSegment {
    fn from_fragment(fragment: AudioFragment) -> Self {
        Self {
            samples: fragment.samples,
            sample_rate: fragment.sample_rate,
            fragment_count: 1,
        }
    }

    fn absorb(&mut self, fragment: AudioFragment) {
        self.samples.extend_from_slice(&fragment.samples);
        self.fragment_count += 1;
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// How many fragments were merged into this segment.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }

    /// Estimated raw PCM payload of this segment.
    pub fn pcm_byte_len(&self) -> u64 {
        self.samples.len() as u64 * 2
    }
}

/// Cut the stream into fragments at silence boundaries.
///
/// Each non-silent range is padded with up to `keep_silence_ms` of its
/// surrounding silence so word onsets and decays stay intact; where two
/// padded ranges would overlap, the overlap splits at its midpoint.
/// Fragments come back in chronological order. Entirely silent (or empty)
/// input yields no fragments.
pub fn extract_fragments(stream: &AudioStream, params: &SilenceParams) -> Vec<AudioFragment> {
    let keep = stream.ms_to_samples(u64::from(params.keep_silence_ms)) as isize;
    let nonsilent = detect_nonsilent(stream, params.min_silence_len_ms, params.silence_thresh_db);

    let mut ranges: Vec<(isize, isize)> = nonsilent
        .iter()
        .map(|&(start, end)| (start as isize - keep, end as isize + keep))
        .collect();

    for i in 1..ranges.len() {
        let last_end = ranges[i - 1].1;
        let next_start = ranges[i].0;
        if next_start < last_end {
            let midpoint = (last_end + next_start) / 2;
            ranges[i - 1].1 = midpoint;
            ranges[i].0 = midpoint;
        }
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            let start = start.max(0) as usize;
            let end = (end.max(0) as usize).min(stream.len());
            AudioFragment::new(stream.slice(start, end), stream.sample_rate(), start)
        })
        .collect()
}

/// Greedily pack fragments into segments under `limit`, preserving order.
///
/// The accumulator starts with the first fragment; each later fragment
/// merges in while the combined measure stays strictly under the ceiling,
/// otherwise the accumulator is emitted and restarted. The final accumulator
/// is always emitted. A lone fragment already at or over the ceiling is
/// emitted as its own segment rather than re-split, so the ceiling is soft
/// in that one case.
///
/// Fails with [`KikitoriError::EmptyAudio`] when there are no fragments.
pub fn pack_fragments(
    fragments: Vec<AudioFragment>,
    limit: SegmentLimit,
) -> Result<Vec<AudioSegment>> {
    let mut iter = fragments.into_iter();
    let Some(first) = iter.next() else {
        return Err(KikitoriError::EmptyAudio);
    };

    let ceiling = limit.ceiling();
    let mut segments = Vec::new();
    let mut current = AudioSegment::from_fragment(first);

    for fragment in iter {
        let combined = limit.measure(current.len() + fragment.len(), current.sample_rate());
        if combined < ceiling {
            current.absorb(fragment);
        } else {
            segments.push(current);
            current = AudioSegment::from_fragment(fragment);
        }
    }
    segments.push(current);

    Ok(segments)
}

/// Split a stream at silence boundaries and pack the pieces under `limit`.
pub fn segment(
    stream: &AudioStream,
    limit: SegmentLimit,
    params: &SilenceParams,
) -> Result<Vec<AudioSegment>> {
    pack_fragments(extract_fragments(stream, params), limit)
}
