//! Prompt domain
//!
//! The fixed system instruction and greeting that seed every game.

mod template;

pub use template::PromptTemplate;
