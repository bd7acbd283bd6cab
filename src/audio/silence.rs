//! Windowed-RMS silence detection.
//!
//! A window of `min_silence_len` is slid across the stream in 1 ms steps;
//! windows whose RMS falls at or below the threshold are silent, and
//! overlapping silent windows merge into maximal [`SilenceInterval`]s.
//! Prefix sums of squared samples make each window check O(1).

use crate::audio::stream::AudioStream;

/// Full-scale amplitude for 16-bit PCM, used to anchor dBFS thresholds.
const FULL_SCALE: f64 = 32768.0;

/// A detected span of near-silence, in sample offsets (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilenceInterval {
    pub start: usize,
    pub end: usize,
}

impl SilenceInterval {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Convert a dBFS level to the equivalent linear RMS amplitude.
fn db_to_linear(db: f32) -> f64 {
    FULL_SCALE * 10f64.powf(f64::from(db) / 20.0)
}

/// RMS of `window` samples starting at `start`, from squared-sample prefix sums.
fn window_rms(prefix: &[u64], start: usize, window: usize) -> f64 {
    let sum = prefix[start + window] - prefix[start];
    (sum as f64 / window as f64).sqrt()
}

/// Detect maximal silent ranges in the stream.
///
/// Returns sample-offset intervals whose every `min_silence_len_ms` window
/// has RMS at or below `silence_thresh_db`. Audio shorter than the window
/// yields no intervals.
pub fn detect_silence(
    stream: &AudioStream,
    min_silence_len_ms: u32,
    silence_thresh_db: f32,
) -> Vec<SilenceInterval> {
    let len = stream.len();
    let window = stream.ms_to_samples(u64::from(min_silence_len_ms));
    if window == 0 || len < window {
        return Vec::new();
    }

    let threshold = db_to_linear(silence_thresh_db);

    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0u64);
    let mut acc = 0u64;
    for &s in stream.samples() {
        acc += (i64::from(s) * i64::from(s)) as u64;
        prefix.push(acc);
    }

    // 1 ms step between window positions
    let step = ((stream.sample_rate() / 1000).max(1)) as usize;
    let last_start = len - window;

    let mut silent_starts: Vec<usize> = Vec::new();
    let mut start = 0;
    while start <= last_start {
        if window_rms(&prefix, start, window) <= threshold {
            silent_starts.push(start);
        }
        start += step;
    }
    // The stepping can overshoot the final position; test it separately so a
    // silent stream tail is never missed.
    if last_start % step != 0 && window_rms(&prefix, last_start, window) <= threshold {
        silent_starts.push(last_start);
    }

    let mut starts = silent_starts.into_iter();
    let Some(first) = starts.next() else {
        return Vec::new();
    };

    // Merge silent window starts into ranges. Two neighbors combine unless
    // the gap between them exceeds the window length (a lone loud blip inside
    // a long quiet span still reads as one silence).
    let mut ranges = Vec::new();
    let mut range_start = first;
    let mut prev = first;
    for s in starts {
        let continuous = s == prev + step;
        let has_gap = s > prev + window;
        if !continuous && has_gap {
            ranges.push(SilenceInterval {
                start: range_start,
                end: prev + window,
            });
            range_start = s;
        }
        prev = s;
    }
    ranges.push(SilenceInterval {
        start: range_start,
        end: prev + window,
    });
    ranges
}

/// Detect the non-silent ranges between silences, in sample offsets.
///
/// A stream with no detectable silence is one non-silent range covering
/// everything; an entirely silent (or empty) stream has none.
pub fn detect_nonsilent(
    stream: &AudioStream,
    min_silence_len_ms: u32,
    silence_thresh_db: f32,
) -> Vec<(usize, usize)> {
    let len = stream.len();
    if len == 0 {
        return Vec::new();
    }

    let silent = detect_silence(stream, min_silence_len_ms, silence_thresh_db);
    if silent.is_empty() {
        return vec![(0, len)];
    }
    if silent[0].start == 0 && silent[0].end == len {
        return Vec::new();
    }

    let mut nonsilent = Vec::new();
    let mut prev_end = 0usize;
    for interval in &silent {
        nonsilent.push((prev_end, interval.start));
        prev_end = interval.end;
    }
    if prev_end < len {
        nonsilent.push((prev_end, len));
    }
    if nonsilent.first() == Some(&(0, 0)) {
        nonsilent.remove(0);
    }
    nonsilent
}
