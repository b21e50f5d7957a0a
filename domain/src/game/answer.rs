//! Player answer value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An answer the player gives to the model's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    Sometimes,
    Unknown,
}

impl Answer {
    /// All answers, in the order they are offered to the player.
    pub const ALL: [Answer; 4] = [
        Answer::Yes,
        Answer::No,
        Answer::Sometimes,
        Answer::Unknown,
    ];

    /// Canonical text sent to the model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Sometimes => "Sometimes",
            Answer::Unknown => "Unknown",
        }
    }

    /// Single-key shortcut accepted at the prompt.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Answer::Yes => "y",
            Answer::No => "n",
            Answer::Sometimes => "s",
            Answer::Unknown => "u",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            "sometimes" | "s" => Ok(Answer::Sometimes),
            "unknown" | "u" | "?" => Ok(Answer::Unknown),
            other => Err(DomainError::InvalidAnswer(other.to_string())),
        }
    }
}
