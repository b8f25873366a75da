//! HTTP client for a locally hosted Ollama server.
//!
//! Only the non-streaming `POST /api/generate` call is used: the prompt goes in,
//! the full `response` text comes back. Failed requests are not retried.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GenerationError;
use crate::config::GenerationConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for `POST {host}/api/generate`.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GenerationError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", config.host.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| GenerationError::Unreachable {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generate response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|source| GenerationError::Unreachable {
            endpoint: self.endpoint.clone(),
            source,
        })?;
        let parsed: GenerateResponse =
            serde_json::from_slice(&body).map_err(GenerationError::Decode)?;
        Ok(parsed.response)
    }
}
