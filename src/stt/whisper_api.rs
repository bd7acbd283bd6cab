//! Remote transcription over a whisper-style HTTP API.

use crate::config::{ApiConfig, TranscriptionConfig};
use crate::error::{KikitoriError, Result};
use crate::stt::transcriber::Transcriber;
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Transcriber backed by an OpenAI-compatible `/audio/transcriptions`
/// endpoint.
///
/// Uploads each encoded segment as a multipart file and requests the plain
/// text response format, so the body is the transcript itself.
pub struct WhisperApiTranscriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    language: String,
}

impl WhisperApiTranscriber {
    pub fn new(api: &ApiConfig, transcription: &TranscriptionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_secs))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| KikitoriError::Transcription {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: transcription_endpoint(&api.base_url),
            api_key: api.key.trim().to_string(),
            model: transcription.model.clone(),
            language: transcription.language.trim().to_string(),
        })
    }
}

fn transcription_endpoint(base_url: &str) -> String {
    format!(
        "{}/audio/transcriptions",
        base_url.trim().trim_end_matches('/')
    )
}

#[async_trait]
impl Transcriber for WhisperApiTranscriber {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<String> {
        debug!(
            "Sending {} byte transcription request to: {}",
            audio.len(),
            self.endpoint
        );

        let file_part = Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| KikitoriError::Transcription {
                message: format!("Failed to build multipart audio part: {}", e),
            })?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "text".to_string());

        if !self.language.is_empty() {
            form = form.text("language", self.language.clone());
        }

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| KikitoriError::Transcription {
                message: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| KikitoriError::Transcription {
                message: format!("Failed to read response body: {}", e),
            })?;

        if !status.is_success() {
            return Err(KikitoriError::Transcription {
                message: format!("Service returned status {}: {}", status, body.trim()),
            });
        }

        debug!("Transcription response: {} chars", body.chars().count());
        Ok(body.trim().to_string())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
