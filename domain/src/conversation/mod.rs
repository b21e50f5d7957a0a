//! Conversation domain.
//!
//! - [`entities::Message`]: a single role-tagged message
//! - [`entities::Conversation`]: the append-only transcript sent to the model
//! - [`history::format_history`]: player-visible view of a transcript

pub mod entities;
pub mod history;
