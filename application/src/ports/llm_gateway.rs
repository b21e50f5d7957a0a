//! LLM Gateway port
//!
//! Defines the interface for asking a language model for its next utterance.

use async_trait::async_trait;
use thiserror::Error;
use twentyq_domain::Message;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No credential is available; not retryable.
    #[error("{0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("No response from model")]
    EmptyResponse,
}

impl GatewayError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration(_))
    }

    /// Text that stands in for the model's reply when the call failed.
    ///
    /// The game never stops on a model failure; the failure is recorded in
    /// the transcript as if the model had said it.
    pub fn to_reply_text(&self) -> String {
        match self {
            GatewayError::Configuration(detail) => format!("Configuration Error: {}", detail),
            other => format!(
                "Error: {}. Please check your API key and try again.",
                other
            ),
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model answering requests, for logging.
    fn model_name(&self) -> &str;

    /// Send the full conversation and return the model's next utterance.
    async fn ask(&self, conversation: &[Message]) -> Result<String, GatewayError>;
}
