//! REST client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use scholar_core::types::GenerationRequest;

use crate::config::GenAiConfig;
use crate::error::GenAiError;
use crate::generator::TextGenerator;
use crate::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for one Gemini model.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GeminiClient {
    /// Create a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, or a [`GenAiError::Api`]
    /// carrying the status and the API's error message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        Err(GenAiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingApiKey)?;

        tracing::debug!(
            model = %self.config.model,
            temperature = request.temperature,
            prompt_len = request.prompt.len(),
            "Calling generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from(request))
            .send()
            .await?;

        let body: GenerateContentResponse = Self::ensure_success(response).await?.json().await?;

        match body.text() {
            Some(text) => {
                tracing::debug!(model = %self.config.model, text_len = text.len(), "Generation complete");
                Ok(text)
            }
            None => Err(GenAiError::EmptyResponse(body.empty_reason())),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }
}
