//! Default configuration constants for kikitori.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default minimum silence duration in milliseconds.
///
/// A quiet span must last at least this long to count as a cut point.
/// 2 seconds targets the pauses between sentences or topics in recorded
/// speech rather than the short gaps between words.
pub const MIN_SILENCE_LEN_MS: u32 = 2000;

/// Default silence threshold in dBFS.
///
/// Windows whose RMS falls at or below this level (relative to i16 full
/// scale) are considered silent. -40 dBFS tolerates room tone and
/// microphone hiss while still catching actual speech.
pub const SILENCE_THRESH_DB: f32 = -40.0;

/// Default silence padding kept on each side of a fragment, in milliseconds.
///
/// A little retained silence keeps word onsets and decays intact and stops
/// fragments from starting mid-breath.
pub const KEEP_SILENCE_MS: u32 = 100;

/// Default maximum audio segment size in bytes (PCM estimate).
///
/// 20 MiB sits safely under the transcription service's 25 MB upload
/// ceiling, leaving margin for container overhead.
pub const MAX_SEGMENT_BYTES: u64 = 20 * 1024 * 1024;

/// Default input size below which segmentation is skipped entirely.
///
/// Files at or under this size upload in a single request; splitting them
/// would only add latency and cost.
pub const SIZE_SKIP_THRESHOLD_BYTES: u64 = 20 * 1024 * 1024;

/// Default maximum text chunk size in characters.
pub const MAX_CHUNK_CHARS: usize = 1000;

/// Default overlap between adjacent text chunks in characters.
///
/// Zero: the correction pass must never see duplicated text, because its
/// outputs are concatenated verbatim.
pub const CHUNK_OVERLAP_CHARS: usize = 0;

/// Default separator priority for chunking Japanese transcripts.
///
/// Tried in order: paragraph break, line break, sentence end, clause end,
/// space, then character-by-character as the last resort. The empty string
/// must stay last so splitting always terminates.
pub const SEPARATOR_PRIORITY: [&str; 6] = ["\n\n", "\n", "。", "、", " ", ""];

/// Default transcription model name.
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Default transcription language hint (ISO 639-1).
pub const TRANSCRIPTION_LANGUAGE: &str = "ja";

/// Default correction model name.
pub const CORRECTION_MODEL: &str = "gpt-3.5-turbo-1106";

/// Default system persona for the correction request.
pub const CORRECTION_PERSONA: &str = "あなたは優秀な日本語の編集者です。";

/// Default correction task template. `{text}` is replaced with the chunk.
///
/// The instructions limit edits to punctuation and typo fixes and forbid
/// summarizing, so corrected chunks stay alignable with the raw transcript.
pub const CORRECTION_TEMPLATE: &str = "##音声文字起こしで不自然な文を修正し、自然な文章にしてください。文章の修正は句読点の追加と誤字脱字の修正にとどめ、要約は絶対にしないでください。\n##音声文字起こし\n{text}\n##修正した文章\n";

/// Placeholder substituted with the chunk text in the correction template.
pub const TEMPLATE_PLACEHOLDER: &str = "{text}";

/// Default base URL for the OpenAI-compatible API.
pub const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout in seconds.
///
/// Transcribing a near-ceiling upload can take a couple of minutes.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default connection timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of audio segments processed in flight at once.
///
/// 1 reproduces strictly sequential processing. Higher values overlap the
/// network round-trips of independent segments; output order is preserved
/// either way.
pub const CONCURRENCY: usize = 1;
