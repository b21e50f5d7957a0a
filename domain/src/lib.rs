//! Domain layer for twenty-questions
//!
//! This crate contains the game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Game
//!
//! The player thinks of a word and the model asks yes/no questions. Each
//! player answer is one turn: it is appended to the [`Conversation`], the
//! question budget ([`TurnLimits`]) is checked, and the model's reply is
//! classified as either another question or a guess.
//!
//! ## Guess detection
//!
//! [`extract_guess`] turns free-form model text into an optional guessed
//! word by pattern matching in a fixed priority order.

pub mod config;
pub mod conversation;
pub mod core;
pub mod game;
pub mod guess;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use conversation::{
    entities::{Conversation, Message, Role},
    history::format_history,
};
pub use core::error::DomainError;
pub use game::{
    answer::Answer,
    limits::TurnLimits,
    state::{GameOutcome, GameState, GuessVerdict, TurnOutcome, TurnStep},
};
pub use guess::extract_guess;
pub use prompt::PromptTemplate;
