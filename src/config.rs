use crate::defaults;
use crate::error::{KikitoriError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub segmenter: SegmenterConfig,
    pub chunker: ChunkerConfig,
    pub transcription: TranscriptionConfig,
    pub correction: CorrectionConfig,
    pub pipeline: PipelineConfig,
}

/// Service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// API key. Usually supplied via OPENAI_API_KEY rather than the file.
    pub key: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

/// Audio segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmenterConfig {
    pub max_segment_bytes: u64,
    pub min_silence_len_ms: u32,
    pub silence_thresh_db: f32,
    pub keep_silence_ms: u32,
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkerConfig {
    pub max_chunk_chars: usize,
    pub overlap_chars: usize,
    /// Separator priority, most preferred first. Must end with "" so
    /// splitting can always fall back to single characters.
    pub separators: Vec<String>,
}

/// Transcription request configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscriptionConfig {
    pub model: String,
    pub language: String,
}

/// Correction request configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorrectionConfig {
    pub enabled: bool,
    pub model: String,
    pub persona: String,
    pub template: String,
}

/// Pipeline orchestration configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub size_skip_threshold_bytes: u64,
    pub concurrency: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            key: String::new(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_segment_bytes: defaults::MAX_SEGMENT_BYTES,
            min_silence_len_ms: defaults::MIN_SILENCE_LEN_MS,
            silence_thresh_db: defaults::SILENCE_THRESH_DB,
            keep_silence_ms: defaults::KEEP_SILENCE_MS,
        }
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: defaults::MAX_CHUNK_CHARS,
            overlap_chars: defaults::CHUNK_OVERLAP_CHARS,
            separators: defaults::SEPARATOR_PRIORITY
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: defaults::TRANSCRIPTION_MODEL.to_string(),
            language: defaults::TRANSCRIPTION_LANGUAGE.to_string(),
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: defaults::CORRECTION_MODEL.to_string(),
            persona: defaults::CORRECTION_PERSONA.to_string(),
            template: defaults::CORRECTION_TEMPLATE.to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            size_skip_threshold_bytes: defaults::SIZE_SKIP_THRESHOLD_BYTES,
            concurrency: defaults::CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns [`KikitoriError::ConfigFileNotFound`] when the file is
    /// missing and [`KikitoriError::ConfigParse`] for invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KikitoriError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                KikitoriError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents).map_err(|e| KikitoriError::ConfigParse {
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Panics on invalid TOML or unreadable files.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(KikitoriError::ConfigFileNotFound { .. }) => Self::default(),
            Err(e) => {
                panic!("Failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - OPENAI_API_KEY → api.key
    /// - KIKITORI_API_KEY → api.key (wins over OPENAI_API_KEY)
    /// - KIKITORI_API_BASE → api.base_url
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            self.api.key = key;
        }

        if let Ok(key) = std::env::var("KIKITORI_API_KEY")
            && !key.is_empty()
        {
            self.api.key = key;
        }

        if let Ok(base_url) = std::env::var("KIKITORI_API_BASE")
            && !base_url.is_empty()
        {
            self.api.base_url = base_url;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/kikitori/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("kikitori")
            .join("config.toml")
    }
}
