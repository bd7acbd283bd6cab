//! Batch pipeline that turns raw audio bytes into a corrected transcript.

use crate::audio::{
    self, AudioStream, CodecFormat, SegmentLimit, SilenceParams, encode_segment,
    mime_for_file_name,
};
use crate::config::Config;
use crate::correction::{ChatApiCorrector, Corrector};
use crate::defaults;
use crate::error::KikitoriError;
use crate::pipeline::error::{PipelineError, Stage};
use crate::stt::{Transcriber, WhisperApiTranscriber};
use crate::text::TextSplitter;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use log::info;
use std::sync::Arc;

/// Tuning knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Ceiling for one packed segment.
    pub segment_limit: SegmentLimit,
    /// Silence detection parameters used when segmenting.
    pub silence: SilenceParams,
    /// Input at or below this many bytes is uploaded whole, skipping
    /// decode and segmentation.
    pub size_skip_threshold_bytes: u64,
    /// Container format for encoded segments.
    pub format: CodecFormat,
    /// Maximum transcription or correction requests in flight at once.
    pub concurrency: usize,
    /// Whether the transcript passes through chunked correction.
    pub correction_enabled: bool,
    /// Chunking parameters for correction requests.
    pub splitter: TextSplitter,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            segment_limit: SegmentLimit::Bytes(defaults::MAX_SEGMENT_BYTES),
            silence: SilenceParams::default(),
            size_skip_threshold_bytes: defaults::SIZE_SKIP_THRESHOLD_BYTES,
            format: CodecFormat::Wav,
            concurrency: defaults::CONCURRENCY,
            correction_enabled: true,
            splitter: TextSplitter::default(),
        }
    }
}

impl PipelineOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            segment_limit: SegmentLimit::Bytes(config.segmenter.max_segment_bytes),
            silence: SilenceParams {
                min_silence_len_ms: config.segmenter.min_silence_len_ms,
                silence_thresh_db: config.segmenter.silence_thresh_db,
                keep_silence_ms: config.segmenter.keep_silence_ms,
            },
            size_skip_threshold_bytes: config.pipeline.size_skip_threshold_bytes,
            format: CodecFormat::Wav,
            concurrency: config.pipeline.concurrency,
            correction_enabled: config.correction.enabled,
            splitter: TextSplitter::new(
                config.chunker.max_chunk_chars,
                config.chunker.overlap_chars,
                config.chunker.separators.clone(),
            ),
        }
    }
}

/// Final pipeline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
    segment_count: usize,
    chunk_count: usize,
}

impl Transcript {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of audio payloads sent for transcription.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of text chunks sent for correction (zero when correction is
    /// disabled).
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }
}

/// Batch pipeline: decode, segment on silence, encode, transcribe, chunk,
/// correct.
///
/// Small inputs skip straight to transcription; everything else is cut at
/// silences and packed under the segment limit first. Per-segment
/// transcripts are concatenated in source order regardless of completion
/// order, and the first failing stage aborts the run.
pub struct Pipeline {
    transcriber: Arc<dyn Transcriber>,
    corrector: Arc<dyn Corrector>,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        corrector: Arc<dyn Corrector>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            transcriber,
            corrector,
            options,
        }
    }

    /// Build a pipeline with API-backed adapters from application config.
    pub fn from_config(config: &Config) -> Result<Self, KikitoriError> {
        let transcriber = WhisperApiTranscriber::new(&config.api, &config.transcription)?;
        let corrector = ChatApiCorrector::new(&config.api, &config.correction)?;
        Ok(Self::new(
            Arc::new(transcriber),
            Arc::new(corrector),
            PipelineOptions::from_config(config),
        ))
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Run the whole pipeline on raw audio file bytes.
    ///
    /// `file_name` is the input's original name; small inputs are uploaded
    /// whole under that name.
    pub async fn run(
        &self,
        raw_audio: Vec<u8>,
        file_name: &str,
    ) -> Result<Transcript, PipelineError> {
        let input_len = raw_audio.len() as u64;

        let (texts, segment_count) = if input_len <= self.options.size_skip_threshold_bytes {
            info!(
                "Input {} bytes is within the {} byte threshold, transcribing {} directly",
                input_len, self.options.size_skip_threshold_bytes, file_name
            );
            let text = self
                .transcriber
                .transcribe(raw_audio, file_name, mime_for_file_name(file_name))
                .await
                .map_err(|e| PipelineError::new(Stage::Transcribe, e))?;
            (vec![text], 1)
        } else {
            self.run_segmented(&raw_audio).await?
        };

        if !self.options.correction_enabled {
            let raw_transcript = texts.concat();
            info!(
                "Correction disabled, returning raw transcript ({} chars)",
                raw_transcript.chars().count()
            );
            return Ok(Transcript {
                text: raw_transcript,
                segment_count,
                chunk_count: 0,
            });
        }

        // Each segment transcript is chunked on its own, so a chunk never
        // straddles a segment boundary.
        let chunks: Vec<String> = texts
            .iter()
            .flat_map(|text| self.options.splitter.split_text(text))
            .collect();
        let chunk_count = chunks.len();
        let corrected = self.correct_chunks(chunks).await?;

        Ok(Transcript {
            text: corrected.concat(),
            segment_count,
            chunk_count,
        })
    }

    /// Decode, cut at silences, pack, encode, and transcribe every segment.
    async fn run_segmented(
        &self,
        raw_audio: &[u8],
    ) -> Result<(Vec<String>, usize), PipelineError> {
        let decoded = AudioStream::from_wav_bytes(raw_audio)
            .map_err(|e| PipelineError::new(Stage::Decode, e))?;
        info!(
            "Decoded {} samples at {} Hz ({:.1}s)",
            decoded.len(),
            decoded.sample_rate(),
            decoded.duration().as_secs_f64()
        );

        let segments = audio::segment(&decoded, self.options.segment_limit, &self.options.silence)
            .map_err(|e| PipelineError::new(Stage::Segment, e))?;

        let format = self.options.format;
        let mut payloads = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            let bytes = encode_segment(segment, format)
                .map_err(|e| PipelineError::new(Stage::Encode, e))?;
            payloads.push((index, bytes));
        }

        let segment_count = payloads.len();
        let concurrency = self.options.concurrency.max(1);
        info!(
            "Transcribing {} segments (concurrency {})",
            segment_count, concurrency
        );

        let texts: Vec<String> = stream::iter(payloads.into_iter().map(|(index, bytes)| {
            let transcriber = Arc::clone(&self.transcriber);
            async move {
                let file_name = format!("segment-{:03}.{}", index, format.extension());
                transcriber
                    .transcribe(bytes, &file_name, format.mime_type())
                    .await
            }
        }))
        .buffered(concurrency)
        .try_collect()
        .await
        .map_err(|e| PipelineError::new(Stage::Transcribe, e))?;

        Ok((texts, segment_count))
    }

    /// Send every chunk for correction, preserving chunk order in the output.
    async fn correct_chunks(&self, chunks: Vec<String>) -> Result<Vec<String>, PipelineError> {
        let concurrency = self.options.concurrency.max(1);
        info!(
            "Correcting {} chunks (concurrency {})",
            chunks.len(),
            concurrency
        );

        stream::iter(chunks.into_iter().map(|chunk| {
            let corrector = Arc::clone(&self.corrector);
            async move { corrector.correct(&chunk).await }
        }))
        .buffered(concurrency)
        .try_collect()
        .await
        .map_err(|e| PipelineError::new(Stage::Correct, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::MockCorrector;
    use crate::error::Result as KikitoriResult;
    use crate::stt::MockTranscriber;
    use async_trait::async_trait;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use std::io::Cursor;
    use std::time::Duration;

    const RATE: u32 = 1000;

    fn tone(len: usize) -> Vec<i16> {
        vec![6000; len]
    }

    fn gap(len: usize) -> Vec<i16> {
        vec![0; len]
    }

    fn wav_bytes(samples: &[i16]) -> Vec<u8> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    /// 920 samples with two 100ms silences; at a 500 byte segment limit the
    /// voiced runs pack into three segments of 210, 260, and 290 samples.
    fn three_burst_audio() -> Vec<i16> {
        let mut samples = tone(200);
        samples.extend(gap(100));
        samples.extend(tone(240));
        samples.extend(gap(100));
        samples.extend(tone(280));
        samples
    }

    fn test_options() -> PipelineOptions {
        PipelineOptions {
            segment_limit: SegmentLimit::Bytes(500),
            silence: SilenceParams {
                min_silence_len_ms: 50,
                silence_thresh_db: -40.0,
                keep_silence_ms: 10,
            },
            size_skip_threshold_bytes: 0,
            format: CodecFormat::Wav,
            concurrency: 1,
            correction_enabled: false,
            splitter: TextSplitter::default(),
        }
    }

    fn pipeline_with(
        transcriber: impl Transcriber + 'static,
        corrector: impl Corrector + 'static,
        options: PipelineOptions,
    ) -> Pipeline {
        Pipeline::new(Arc::new(transcriber), Arc::new(corrector), options)
    }

    /// Transcriber whose delay shrinks as payloads grow, so later segments
    /// finish first under concurrency.
    struct ReverseDelayTranscriber;

    #[async_trait]
    impl Transcriber for ReverseDelayTranscriber {
        async fn transcribe(
            &self,
            audio: Vec<u8>,
            _file_name: &str,
            _mime_type: &str,
        ) -> KikitoriResult<String> {
            let delay_ms = if audio.len() < 500 {
                30
            } else if audio.len() < 600 {
                15
            } else {
                1
            };
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok(format!("[{} bytes]", audio.len()))
        }

        fn model_name(&self) -> &str {
            "reverse-delay"
        }
    }

    /// Corrector whose delay shrinks for later chunks of "111。222。333".
    struct ReverseDelayCorrector;

    #[async_trait]
    impl Corrector for ReverseDelayCorrector {
        async fn correct(&self, chunk: &str) -> KikitoriResult<String> {
            let delay_ms = match chunk.trim_start_matches('。').chars().next() {
                Some('1') => 30,
                Some('2') => 15,
                _ => 1,
            };
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok(format!("<{}>", chunk))
        }

        fn model_name(&self) -> &str {
            "reverse-delay"
        }
    }

    #[tokio::test]
    async fn test_fast_path_uploads_input_whole() {
        let transcriber = Arc::new(MockTranscriber::new("whisper-1").with_size_echo());
        let options = PipelineOptions {
            size_skip_threshold_bytes: 10_000,
            ..test_options()
        };
        let pipeline = Pipeline::new(
            transcriber.clone(),
            Arc::new(MockCorrector::new("gpt")),
            options,
        );

        let input = wav_bytes(&three_burst_audio());
        let input_len = input.len();
        assert_eq!(input_len, 44 + 2 * 920);

        let transcript = pipeline.run(input, "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), format!("[{} bytes]", input_len));
        assert_eq!(transcript.segment_count(), 1);
        assert_eq!(transcriber.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fast_path_boundary_is_inclusive() {
        let input = wav_bytes(&three_burst_audio());
        let transcriber = Arc::new(MockTranscriber::new("whisper-1").with_size_echo());
        let options = PipelineOptions {
            size_skip_threshold_bytes: input.len() as u64,
            ..test_options()
        };
        let pipeline = Pipeline::new(
            transcriber.clone(),
            Arc::new(MockCorrector::new("gpt")),
            options,
        );

        pipeline.run(input, "audio.wav").await.unwrap();

        // Exactly at the threshold still skips segmentation.
        assert_eq!(transcriber.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fast_path_uploads_under_original_file_name() {
        let transcriber = Arc::new(MockTranscriber::new("whisper-1"));
        let options = PipelineOptions {
            size_skip_threshold_bytes: 10_000,
            ..test_options()
        };
        let pipeline = Pipeline::new(
            transcriber.clone(),
            Arc::new(MockCorrector::new("gpt")),
            options,
        );

        // Compressed input is never decoded on this path, so the upload
        // keeps the caller's name and a matching MIME type.
        pipeline
            .run(vec![0xFF, 0xFB, 0x90, 0x00], "interview.mp3")
            .await
            .unwrap();

        assert_eq!(
            transcriber.uploads(),
            vec![("interview.mp3".to_string(), "audio/mpeg".to_string())]
        );
    }

    #[tokio::test]
    async fn test_chunks_never_cross_segment_boundaries() {
        let transcriber =
            MockTranscriber::new("whisper-1").with_scripted_responses(["AAAA", "BBBB", "CCCC"]);
        let corrector = Arc::new(MockCorrector::new("gpt").with_markers("<", ">"));
        let options = PipelineOptions {
            correction_enabled: true,
            splitter: TextSplitter::new(6, 0, vec![String::new()]),
            ..test_options()
        };
        let pipeline = Pipeline::new(Arc::new(transcriber), corrector.clone(), options);

        let transcript = pipeline
            .run(wav_bytes(&three_burst_audio()), "audio.wav")
            .await
            .unwrap();

        // The six-char budget could hold text from two segments, but each
        // segment transcript is chunked on its own.
        assert_eq!(
            corrector.received_chunks(),
            vec!["AAAA".to_string(), "BBBB".to_string(), "CCCC".to_string()]
        );
        assert_eq!(transcript.text(), "<AAAA><BBBB><CCCC>");
        assert_eq!(transcript.chunk_count(), 3);
    }

    #[tokio::test]
    async fn test_slow_path_packs_segments_under_limit() {
        let transcriber = Arc::new(MockTranscriber::new("whisper-1").with_size_echo());
        let pipeline = Pipeline::new(
            transcriber.clone(),
            Arc::new(MockCorrector::new("gpt")),
            test_options(),
        );

        let transcript = pipeline
            .run(wav_bytes(&three_burst_audio()), "audio.wav")
            .await.unwrap();

        // Padded fragments of 210, 260, and 290 samples encode to WAV files
        // of 464, 564, and 624 bytes.
        assert_eq!(transcript.text(), "[464 bytes][564 bytes][624 bytes]");
        assert_eq!(transcript.segment_count(), 3);
        assert_eq!(transcriber.call_count(), 3);
    }

    #[tokio::test]
    async fn test_transcripts_keep_source_order_under_concurrency() {
        let options = PipelineOptions {
            concurrency: 3,
            ..test_options()
        };
        let pipeline = pipeline_with(
            ReverseDelayTranscriber,
            MockCorrector::new("gpt"),
            options,
        );

        let transcript = pipeline
            .run(wav_bytes(&three_burst_audio()), "audio.wav")
            .await.unwrap();

        // Later segments complete first, yet the transcript follows source
        // order.
        assert_eq!(transcript.text(), "[464 bytes][564 bytes][624 bytes]");
    }

    #[tokio::test]
    async fn test_corrected_chunks_keep_order_under_concurrency() {
        let transcriber = MockTranscriber::new("whisper-1").with_response("111。222。333");
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            concurrency: 3,
            correction_enabled: true,
            splitter: TextSplitter::new(4, 0, vec!["。".to_string(), "".to_string()]),
            ..test_options()
        };
        let pipeline = pipeline_with(transcriber, ReverseDelayCorrector, options);

        let transcript = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), "<111><。222><。333>");
        assert_eq!(transcript.chunk_count(), 3);
    }

    #[tokio::test]
    async fn test_correction_wraps_each_chunk() {
        let transcriber = MockTranscriber::new("whisper-1").with_response("ab。cd。ef");
        let corrector = MockCorrector::new("gpt").with_markers("<", ">");
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            correction_enabled: true,
            splitter: TextSplitter::new(4, 0, vec!["。".to_string(), "".to_string()]),
            ..test_options()
        };
        let pipeline = pipeline_with(transcriber, corrector, options);

        let transcript = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), "<ab><。cd><。ef>");
        assert_eq!(transcript.chunk_count(), 3);
    }

    #[tokio::test]
    async fn test_identity_correction_reassembles_transcript_exactly() {
        let transcriber = MockTranscriber::new("whisper-1")
            .with_response("今日は晴れです。明日は雨かもしれません。");
        let corrector = MockCorrector::new("gpt");
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            correction_enabled: true,
            splitter: TextSplitter::new(8, 0, vec!["。".to_string(), "".to_string()]),
            ..test_options()
        };
        let pipeline = pipeline_with(transcriber, corrector, options);

        let transcript = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), "今日は晴れです。明日は雨かもしれません。");
        assert!(transcript.chunk_count() > 1);
    }

    #[tokio::test]
    async fn test_correction_disabled_returns_raw_transcript() {
        let transcriber = MockTranscriber::new("whisper-1").with_response("修正されない生の文章");
        let corrector = Arc::new(MockCorrector::new("gpt").with_response("must not appear"));
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            correction_enabled: false,
            ..test_options()
        };
        let pipeline = Pipeline::new(Arc::new(transcriber), corrector.clone(), options);

        let transcript = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), "修正されない生の文章");
        assert_eq!(transcript.chunk_count(), 0);
        assert_eq!(corrector.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_transcript_produces_no_correction_calls() {
        let transcriber = MockTranscriber::new("whisper-1").with_response("");
        let corrector = Arc::new(MockCorrector::new("gpt"));
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            correction_enabled: true,
            ..test_options()
        };
        let pipeline = Pipeline::new(Arc::new(transcriber), corrector.clone(), options);

        let transcript = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await.unwrap();

        assert_eq!(transcript.text(), "");
        assert_eq!(transcript.chunk_count(), 0);
        assert_eq!(corrector.call_count(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_input_fails_at_decode_stage() {
        let pipeline = pipeline_with(
            MockTranscriber::new("whisper-1"),
            MockCorrector::new("gpt"),
            test_options(),
        );

        let error = pipeline
            .run(vec![0xDE, 0xAD, 0xBE, 0xEF], "audio.wav")
            .await
            .unwrap_err();

        assert_eq!(error.stage, Stage::Decode);
        assert!(matches!(error.source, KikitoriError::AudioDecode { .. }));
    }

    #[tokio::test]
    async fn test_silent_input_fails_at_segment_stage() {
        let pipeline = pipeline_with(
            MockTranscriber::new("whisper-1"),
            MockCorrector::new("gpt"),
            test_options(),
        );

        let error = pipeline
            .run(wav_bytes(&gap(500)), "audio.wav")
            .await
            .unwrap_err();

        assert_eq!(error.stage, Stage::Segment);
        assert!(matches!(error.source, KikitoriError::EmptyAudio));
    }

    #[tokio::test]
    async fn test_transcription_failure_aborts_run() {
        let transcriber = Arc::new(
            MockTranscriber::new("whisper-1")
                .with_size_echo()
                .with_failure_from_call(1),
        );
        let pipeline = Pipeline::new(
            transcriber.clone(),
            Arc::new(MockCorrector::new("gpt")),
            test_options(),
        );

        let error = pipeline
            .run(wav_bytes(&three_burst_audio()), "audio.wav")
            .await.unwrap_err();

        assert_eq!(error.stage, Stage::Transcribe);
        assert!(matches!(error.source, KikitoriError::Transcription { .. }));
    }

    #[tokio::test]
    async fn test_correction_failure_yields_no_partial_transcript() {
        let transcriber = MockTranscriber::new("whisper-1").with_response("ab。cd。ef");
        let corrector = MockCorrector::new("gpt").with_failure_from_call(1);
        let options = PipelineOptions {
            size_skip_threshold_bytes: u64::MAX,
            correction_enabled: true,
            splitter: TextSplitter::new(4, 0, vec!["。".to_string(), "".to_string()]),
            ..test_options()
        };
        let pipeline = pipeline_with(transcriber, corrector, options);

        let result = pipeline.run(wav_bytes(&tone(100)), "audio.wav").await;

        let error = result.unwrap_err();
        assert_eq!(error.stage, Stage::Correct);
        assert!(matches!(error.source, KikitoriError::Correction { .. }));
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_treated_as_one() {
        let options = PipelineOptions {
            concurrency: 0,
            ..test_options()
        };
        let pipeline = pipeline_with(
            MockTranscriber::new("whisper-1").with_size_echo(),
            MockCorrector::new("gpt"),
            options,
        );

        let transcript = pipeline
            .run(wav_bytes(&three_burst_audio()), "audio.wav")
            .await.unwrap();

        assert_eq!(transcript.segment_count(), 3);
    }

    #[test]
    fn test_options_default_matches_defaults() {
        let options = PipelineOptions::default();

        assert_eq!(
            options.segment_limit,
            SegmentLimit::Bytes(defaults::MAX_SEGMENT_BYTES)
        );
        assert_eq!(
            options.size_skip_threshold_bytes,
            defaults::SIZE_SKIP_THRESHOLD_BYTES
        );
        assert_eq!(options.concurrency, defaults::CONCURRENCY);
        assert!(options.correction_enabled);
    }

    #[test]
    fn test_options_from_config_maps_every_section() {
        let mut config = Config::default();
        config.segmenter.max_segment_bytes = 1234;
        config.segmenter.min_silence_len_ms = 700;
        config.segmenter.silence_thresh_db = -35.0;
        config.segmenter.keep_silence_ms = 50;
        config.pipeline.size_skip_threshold_bytes = 999;
        config.pipeline.concurrency = 4;
        config.correction.enabled = false;
        config.chunker.max_chunk_chars = 80;
        config.chunker.overlap_chars = 8;

        let options = PipelineOptions::from_config(&config);

        assert_eq!(options.segment_limit, SegmentLimit::Bytes(1234));
        assert_eq!(options.silence.min_silence_len_ms, 700);
        assert_eq!(options.silence.silence_thresh_db, -35.0);
        assert_eq!(options.silence.keep_silence_ms, 50);
        assert_eq!(options.size_skip_threshold_bytes, 999);
        assert_eq!(options.concurrency, 4);
        assert!(!options.correction_enabled);
        assert_eq!(options.splitter.max_chunk_chars(), 80);
        assert_eq!(options.splitter.overlap_chars(), 8);
    }

    #[test]
    fn test_from_config_builds_api_adapters() {
        let pipeline = Pipeline::from_config(&Config::default()).unwrap();

        assert_eq!(pipeline.transcriber.model_name(), defaults::TRANSCRIPTION_MODEL);
        assert_eq!(pipeline.corrector.model_name(), defaults::CORRECTION_MODEL);
    }

    #[test]
    fn test_transcript_accessors() {
        let transcript = Transcript {
            text: "本文".to_string(),
            segment_count: 2,
            chunk_count: 5,
        };

        assert_eq!(transcript.text(), "本文");
        assert_eq!(transcript.segment_count(), 2);
        assert_eq!(transcript.chunk_count(), 5);
        assert_eq!(transcript.into_text(), "本文");
    }
}
