//! Guess detection.
//!
//! Classifies a free-form model reply as either an ordinary question or a
//! guess naming a specific word. See [`parsing::extract_guess`].

pub mod parsing;

pub use parsing::extract_guess;
