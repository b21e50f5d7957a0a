//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished game is reported
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable summary (default)
    #[default]
    Text,
    /// JSON dump of the final game state
    Json,
}
