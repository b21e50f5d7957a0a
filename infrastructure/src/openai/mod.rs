//! OpenAI-compatible chat completions adapter
//!
//! Implements LlmGateway over the `/v1/chat/completions` HTTP endpoint.

pub mod error;
pub mod gateway;
pub mod types;
