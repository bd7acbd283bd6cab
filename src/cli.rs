//! Command-line interface for kikitori
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Audio transcription with silence-aware segmentation and chunked correction
#[derive(Parser, Debug)]
#[command(
    name = "kikitori",
    version,
    about = "Transcribe audio files with silence-aware segmentation and chunked text correction"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: debug logs, -vv: trace logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a silence duration string into milliseconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (milliseconds), single-unit (`500ms`, `2s`), and compound (`1m30s`).
fn parse_duration_ms(s: &str) -> Result<u32, String> {
    let s = s.trim();
    // Bare number → milliseconds
    if let Ok(ms) = s.parse::<u32>() {
        return Ok(ms);
    }
    humantime::parse_duration(s)
        .map_err(|e| e.to_string())
        .and_then(|d| {
            u32::try_from(d.as_millis()).map_err(|_| format!("duration too large: {}", s))
        })
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe an audio file to corrected text
    Run {
        /// Audio file to transcribe (WAV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the transcript to a file instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,

        /// Also emit the transcript base64-encoded on stdout
        #[arg(long)]
        base64: bool,

        /// Write the base64-encoded transcript to a file
        #[arg(long, value_name = "PATH")]
        base64_output: Option<PathBuf>,

        /// Transcription model override (e.g., whisper-1)
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,

        /// Transcription language hint override (ISO 639-1, e.g., ja)
        #[arg(long, value_name = "LANG")]
        language: Option<String>,

        /// Correction model override (e.g., gpt-4o-mini)
        #[arg(long, value_name = "MODEL")]
        correction_model: Option<String>,

        /// Skip the correction pass, output the raw transcript
        #[arg(long)]
        no_correction: bool,

        /// Maximum packed segment size in bytes
        #[arg(long, value_name = "BYTES")]
        max_segment_size: Option<u64>,

        /// Minimum silence duration counted as a cut point. Examples: 2s, 500ms
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_ms)]
        min_silence: Option<u32>,

        /// Silence threshold in dBFS (e.g., -40)
        #[arg(long, value_name = "DB", allow_hyphen_values = true)]
        silence_threshold: Option<f32>,

        /// Maximum correction chunk size in characters
        #[arg(long, value_name = "CHARS")]
        chunk_size: Option<usize>,

        /// Segments or chunks in flight at once (1 = sequential)
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,

        /// Input size in bytes below which segmentation is skipped
        #[arg(long, value_name = "BYTES")]
        skip_threshold: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_run_with_file() {
        let cli = parse(&["kikitori", "run", "interview.wav"]);
        match cli.command {
            Commands::Run {
                file,
                output,
                base64,
                base64_output,
                model,
                language,
                correction_model,
                no_correction,
                max_segment_size,
                min_silence,
                silence_threshold,
                chunk_size,
                concurrency,
                skip_threshold,
            } => {
                assert_eq!(file, PathBuf::from("interview.wav"));
                assert!(output.is_none());
                assert!(!base64);
                assert!(base64_output.is_none());
                assert!(model.is_none());
                assert!(language.is_none());
                assert!(correction_model.is_none());
                assert!(!no_correction);
                assert!(max_segment_size.is_none());
                assert!(min_silence.is_none());
                assert!(silence_threshold.is_none());
                assert!(chunk_size.is_none());
                assert!(concurrency.is_none());
                assert!(skip_threshold.is_none());
            }
            _ => panic!("Expected Run command"),
        }
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_run_requires_file() {
        let result = Cli::try_parse_from(["kikitori", "run"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_requires_subcommand() {
        let result = Cli::try_parse_from(["kikitori"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = parse(&[
            "kikitori",
            "run",
            "talk.wav",
            "--model",
            "whisper-large",
            "--language",
            "en",
            "--correction-model",
            "gpt-4o-mini",
            "--no-correction",
            "--concurrency",
            "4",
        ]);
        match cli.command {
            Commands::Run {
                model,
                language,
                correction_model,
                no_correction,
                concurrency,
                ..
            } => {
                assert_eq!(model.as_deref(), Some("whisper-large"));
                assert_eq!(language.as_deref(), Some("en"));
                assert_eq!(correction_model.as_deref(), Some("gpt-4o-mini"));
                assert!(no_correction);
                assert_eq!(concurrency, Some(4));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_output_flags() {
        let cli = parse(&[
            "kikitori",
            "run",
            "talk.wav",
            "-o",
            "transcript.txt",
            "--base64",
            "--base64-output",
            "transcript.b64",
        ]);
        match cli.command {
            Commands::Run {
                output,
                base64,
                base64_output,
                ..
            } => {
                assert_eq!(output, Some(PathBuf::from("transcript.txt")));
                assert!(base64);
                assert_eq!(base64_output, Some(PathBuf::from("transcript.b64")));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_segmentation_flags() {
        let cli = parse(&[
            "kikitori",
            "run",
            "talk.wav",
            "--max-segment-size",
            "1048576",
            "--min-silence",
            "2s",
            "--silence-threshold",
            "-35.5",
            "--chunk-size",
            "500",
            "--skip-threshold",
            "4096",
        ]);
        match cli.command {
            Commands::Run {
                max_segment_size,
                min_silence,
                silence_threshold,
                chunk_size,
                skip_threshold,
                ..
            } => {
                assert_eq!(max_segment_size, Some(1048576));
                assert_eq!(min_silence, Some(2000));
                assert_eq!(silence_threshold, Some(-35.5));
                assert_eq!(chunk_size, Some(500));
                assert_eq!(skip_threshold, Some(4096));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_config_command() {
        let cli = parse(&["kikitori", "config"]);
        match cli.command {
            Commands::Config => {}
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_parse_completions() {
        let cli = parse(&["kikitori", "completions", "bash"]);
        match cli.command {
            Commands::Completions { shell } => {
                assert_eq!(shell, Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = parse(&["kikitori", "config", "--config", "/path/to/config.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_global_options_after_command() {
        // Global options should work before or after the command
        let cli = parse(&["kikitori", "run", "talk.wav", "--config", "/tmp/c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_parse_quiet_short_flag() {
        let cli = parse(&["kikitori", "-q", "config"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_verbose_levels() {
        assert_eq!(parse(&["kikitori", "config", "-v"]).verbose, 1);
        assert_eq!(parse(&["kikitori", "config", "-vv"]).verbose, 2);
        assert_eq!(parse(&["kikitori", "config", "-v", "-v"]).verbose, 2);
    }

    #[test]
    fn test_invalid_command_returns_error() {
        let result = Cli::try_parse_from(["kikitori", "invalid"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["kikitori", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["kikitori", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    // ── Duration parsing tests ───────────────────────────────────────────

    #[test]
    fn test_parse_duration_ms_bare_number() {
        assert_eq!(parse_duration_ms("500").unwrap(), 500);
        assert_eq!(parse_duration_ms("0").unwrap(), 0);
        assert_eq!(parse_duration_ms("2000").unwrap(), 2000);
    }

    #[test]
    fn test_parse_duration_ms_with_units() {
        assert_eq!(parse_duration_ms("500ms").unwrap(), 500);
        assert_eq!(parse_duration_ms("2s").unwrap(), 2000);
        assert_eq!(parse_duration_ms("1m").unwrap(), 60_000);
    }

    #[test]
    fn test_parse_duration_ms_compound() {
        assert_eq!(parse_duration_ms("1m30s").unwrap(), 90_000);
        assert_eq!(parse_duration_ms("2s500ms").unwrap(), 2500);
    }

    #[test]
    fn test_parse_duration_ms_invalid() {
        assert!(parse_duration_ms("abc").is_err());
        assert!(parse_duration_ms("10x").is_err());
        assert!(parse_duration_ms("").is_err());
        assert!(parse_duration_ms("-5").is_err());
    }

    #[test]
    fn test_min_silence_cli_arg() {
        let cli = parse(&["kikitori", "run", "a.wav", "--min-silence", "750ms"]);
        match cli.command {
            Commands::Run { min_silence, .. } => assert_eq!(min_silence, Some(750)),
            _ => panic!("Expected Run command"),
        }
    }
}
