//! Remote correction over an OpenAI-compatible chat completions API.

use crate::config::{ApiConfig, CorrectionConfig};
use crate::correction::corrector::Corrector;
use crate::correction::prompt::CorrectionPrompt;
use crate::error::{KikitoriError, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Corrector backed by a `/chat/completions` endpoint.
///
/// Sends the configured persona as the system message and the rendered
/// template as the user message. Requests run at temperature zero so
/// corrections stay deterministic.
pub struct ChatApiCorrector {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    prompt: CorrectionPrompt,
}

impl ChatApiCorrector {
    pub fn new(api: &ApiConfig, correction: &CorrectionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_secs))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| KikitoriError::Correction {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(&api.base_url),
            api_key: api.key.trim().to_string(),
            model: correction.model.clone(),
            prompt: CorrectionPrompt::new(&correction.persona, &correction.template),
        })
    }

    fn build_request(&self, chunk: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.prompt.persona().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: self.prompt.render(chunk),
                },
            ],
            temperature: 0.0,
        }
    }
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim().trim_end_matches('/'))
}

fn content_from_response(response: ChatResponse) -> Result<String> {
    let content = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(KikitoriError::Correction {
            message: "Service returned an empty correction".to_string(),
        });
    }

    Ok(content.to_string())
}

#[async_trait]
impl Corrector for ChatApiCorrector {
    async fn correct(&self, chunk: &str) -> Result<String> {
        let request = self.build_request(chunk);
        debug!(
            "Sending {} char correction request to: {}",
            chunk.chars().count(),
            self.endpoint
        );

        let mut req = self.client.post(&self.endpoint).json(&request);
        if !self.api_key.is_empty() {
            req = req.bearer_auth(&self.api_key);
        }

        let response = req.send().await.map_err(|e| KikitoriError::Correction {
            message: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KikitoriError::Correction {
                message: format!("Service returned status {}: {}", status, body.trim()),
            });
        }

        let parsed: ChatResponse =
            response.json().await.map_err(|e| KikitoriError::Correction {
                message: format!("Failed to parse response: {}", e),
            })?;

        content_from_response(parsed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
