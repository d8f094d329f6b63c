//! Client for the OpenAI chat completions API.

use crate::ClientConfig;
use crate::openai::{ChatRequest, ChatResponse, conversions};
use crate::retry::{RetryConfig, retry_with_backoff};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use vasari_core::{CompletionRequest, CompletionResponse};
use vasari_error::{
    CompletionError, CompletionErrorKind, CompletionResult, ConfigError, VasariResult,
};
use vasari_interface::VasariDriver;

/// Chat completions client with bearer auth, a per-call deadline, and
/// bounded retry on transient failures.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    provider_name: &'static str,
    retry: RetryConfig,
}

impl OpenAiClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the API key is empty or the HTTP
    /// client cannot be constructed. Either way, nothing has gone over the
    /// wire yet.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn from_config(config: &ClientConfig) -> VasariResult<Self> {
        if config.api_key().trim().is_empty() {
            return Err(ConfigError::new(format!(
                "API key is empty: set {} or supply one explicitly",
                crate::API_KEY_VAR
            ))
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            timeout_secs = config.timeout_secs(),
            "Created OpenAI client"
        );

        Ok(Self {
            client,
            api_key: config.api_key().clone(),
            model: config.model().clone(),
            base_url: config.base_url().clone(),
            provider_name: "openai",
            retry: RetryConfig::with_max_attempts(*config.max_retries()),
        })
    }

    /// One attempt: send the request and decode the response.
    async fn send_request(&self, chat_request: &ChatRequest) -> CompletionResult<ChatResponse> {
        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(chat_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(provider = self.provider_name, error = ?e, "Request timed out");
                    CompletionError::new(CompletionErrorKind::Timeout(e.to_string()))
                } else {
                    error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                    CompletionError::new(CompletionErrorKind::Http(format!(
                        "Request failed: {}",
                        e
                    )))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to decode response");
            CompletionError::new(CompletionErrorKind::Decode(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl VasariDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> VasariResult<CompletionResponse> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            provider = self.provider_name,
            model = %self.model,
            prompt_chars = req.prompt.len(),
            format = %req.format,
            "Sending request"
        );

        let chat_response =
            retry_with_backoff(&self.retry, || self.send_request(&chat_request)).await?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            "Received response"
        );

        Ok(conversions::from_chat_response(&chat_response)?)
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
