//! Application layer for twenty-questions
//!
//! This crate contains the play-game use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ModelParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{GameProgressNotifier, NoProgress},
};
pub use use_cases::play_game::PlayGameUseCase;
