use crate::{ChatCompletionRequest, CompletionConfig, normalize_body};
use async_trait::async_trait;
use neura_error::{CompletionError, CompletionErrorKind, NeuraResult};
use neura_interface::{GenerateRequest, TextGenerator};
use std::time::Duration;
use tracing::instrument;

/// Client for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl CompletionClient {
    /// Create a new completion client with the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        tracing::debug!("Creating completion client");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Send `prompt` and return the normalized, trimmed model text
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest::single_prompt(
            self.config.model(),
            prompt,
            max_tokens,
            Some(*self.config.temperature()),
        );
        tracing::debug!(url = %self.config.base_url(), "Sending chat completion request");

        let mut req = self
            .client
            .post(self.config.base_url())
            .json(&request)
            .header("Content-Type", "application/json");

        if let Some(api_key) = self.config.api_key() {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            CompletionError::new(CompletionErrorKind::UpstreamUnavailable(e.to_string()))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            CompletionError::new(CompletionErrorKind::UpstreamUnavailable(e.to_string()))
        })?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Provider returned error");
            return Err(CompletionError::new(CompletionErrorKind::upstream(
                status.as_u16(),
                &body,
                status.canonical_reason().unwrap_or_default(),
            )));
        }

        let text = normalize_body(&body);
        if text.is_empty() {
            tracing::error!("Provider returned an empty response");
            return Err(CompletionError::new(
                CompletionErrorKind::UpstreamEmptyResponse,
            ));
        }

        tracing::debug!(response_chars = text.len(), "Chat completion successful");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for CompletionClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> NeuraResult<String> {
        let max_tokens = req.max_tokens().unwrap_or(*self.config.default_max_tokens());
        Ok(self.complete(req.prompt(), max_tokens).await?)
    }

    fn provider_name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
