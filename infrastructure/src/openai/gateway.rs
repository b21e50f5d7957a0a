//! OpenAI-compatible LLM Gateway implementation

use crate::openai::error::{map_http_status, map_reqwest_error};
use crate::openai::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use twentyq_application::{GatewayError, LlmGateway, ModelParams};
use twentyq_domain::Message;

/// Connection settings for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Base URL without the `/v1/...` path.
    pub base_url: String,
    /// Resolved API key, if any.
    pub api_key: Option<String>,
    /// Name of the environment variable the key is expected in, for messages.
    pub api_key_env: String,
    /// Per-request timeout; `None` keeps the client default.
    pub timeout: Option<Duration>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout: None,
        }
    }
}

/// LLM Gateway implementation for the OpenAI chat completions API
///
/// A missing API key does not prevent construction; it is reported by
/// [`ask`](LlmGateway::ask) as a [`GatewayError::Configuration`] so the game
/// can show it in place of a question.
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
    params: ModelParams,
}

impl OpenAiLlmGateway {
    pub fn new(settings: OpenAiSettings, params: ModelParams) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        info!(
            "OpenAiLlmGateway initialized (model: {}, base_url: {})",
            params.model, settings.base_url
        );

        Ok(Self {
            client,
            settings,
            params,
        })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GatewayError::Configuration(format!(
                    "{} environment variable is not set. Please set it in your environment or config file.",
                    self.settings.api_key_env
                ))
            })
    }

    fn build_request<'a>(&'a self, conversation: &'a [Message]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.params.model,
            messages: conversation.iter().map(ChatMessage::from).collect(),
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    fn model_name(&self) -> &str {
        &self.params.model
    }

    async fn ask(&self, conversation: &[Message]) -> Result<String, GatewayError> {
        let api_key = self.api_key()?;
        let request = self.build_request(conversation);

        debug!(
            "Sending {} messages to {}",
            request.messages.len(),
            self.endpoint()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(map_http_status(status, &body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::RequestFailed(format!("Invalid response body: {}", e)))?;

        parsed.first_text().ok_or(GatewayError::EmptyResponse)
    }
}
