//! Application entry point for the `run` command.
//!
//! Orchestrates the complete flow:
//! read file → pipeline (segment → transcribe → correct) → write artifacts

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::Pipeline;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CLI overrides and output destinations for one `run` invocation.
///
/// Every `Option` field, when set, takes precedence over the loaded
/// configuration. Defaults leave the configuration untouched and print the
/// transcript to stdout.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub output: Option<PathBuf>,
    pub base64: bool,
    pub base64_output: Option<PathBuf>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub correction_model: Option<String>,
    pub no_correction: bool,
    pub max_segment_size: Option<u64>,
    pub min_silence_ms: Option<u32>,
    pub silence_threshold_db: Option<f32>,
    pub chunk_size: Option<usize>,
    pub concurrency: Option<usize>,
    pub skip_threshold: Option<u64>,
}

impl RunOptions {
    /// Fold the CLI overrides into the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.transcription.model = model.clone();
        }
        if let Some(language) = &self.language {
            config.transcription.language = language.clone();
        }
        if let Some(model) = &self.correction_model {
            config.correction.model = model.clone();
        }
        if self.no_correction {
            config.correction.enabled = false;
        }
        if let Some(bytes) = self.max_segment_size {
            config.segmenter.max_segment_bytes = bytes;
        }
        if let Some(ms) = self.min_silence_ms {
            config.segmenter.min_silence_len_ms = ms;
        }
        if let Some(db) = self.silence_threshold_db {
            config.segmenter.silence_thresh_db = db;
        }
        if let Some(chars) = self.chunk_size {
            config.chunker.max_chunk_chars = chars;
        }
        if let Some(n) = self.concurrency {
            config.pipeline.concurrency = n;
        }
        if let Some(bytes) = self.skip_threshold {
            config.pipeline.size_skip_threshold_bytes = bytes;
        }
    }
}

/// Run the transcription pipeline on a file and write the requested artifacts.
///
/// Progress goes to stderr (suppressed by `quiet`); the transcript goes to
/// stdout unless `--output` redirects it to a file.
pub async fn run_transcription(
    mut config: Config,
    file: &Path,
    options: RunOptions,
    quiet: bool,
) -> anyhow::Result<()> {
    options.apply_to(&mut config);

    let raw_audio = std::fs::read(file)?;
    progress(
        quiet,
        &format!("read {} ({} bytes)", file.display(), raw_audio.len()),
    );

    // Small inputs are uploaded unsegmented under their original name, so
    // compressed files keep a truthful name and type.
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("audio");

    let pipeline = Pipeline::from_config(&config)?;
    let transcript = pipeline.run(raw_audio, file_name).await?;

    progress(
        quiet,
        &format!(
            "transcribed {} segment(s), corrected {} chunk(s), {} chars",
            transcript.segment_count(),
            transcript.chunk_count(),
            transcript.text().chars().count()
        ),
    );

    write_artifacts(transcript.text(), &options, quiet)?;
    Ok(())
}

/// Write the plain and base64 transcript artifacts per the output options.
fn write_artifacts(text: &str, options: &RunOptions, quiet: bool) -> Result<()> {
    match &options.output {
        Some(path) => {
            std::fs::write(path, text)?;
            progress(quiet, &format!("wrote transcript to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if options.base64 || options.base64_output.is_some() {
        let encoded = BASE64.encode(text.as_bytes());
        match &options.base64_output {
            Some(path) => {
                std::fs::write(path, &encoded)?;
                progress(quiet, &format!("wrote base64 artifact to {}", path.display()));
            }
            None => println!("{}", encoded),
        }
    }

    Ok(())
}

/// Print a progress line to stderr unless quiet mode is on.
fn progress(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("{} {}", "kikitori:".dimmed(), message);
    }
}
