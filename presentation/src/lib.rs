//! Presentation layer for twenty-questions
//!
//! This crate contains the CLI definition, console formatting,
//! the thinking spinner, and the interactive game REPL.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use game::repl::{GameRepl, ReplControl};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ThinkingSpinner;
