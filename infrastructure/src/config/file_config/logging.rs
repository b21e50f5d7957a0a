//! Transcript logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of every game
    pub transcripts: bool,
    /// Directory for transcripts (default: platform data dir)
    pub transcript_dir: Option<String>,
}

impl FileLoggingConfig {
    /// Directory transcripts are written to, if one can be determined.
    pub fn resolve_transcript_dir(&self) -> Option<PathBuf> {
        match &self.transcript_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| d.join("twenty-questions").join("transcripts")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_transcript_dir() {
        let config = FileLoggingConfig {
            transcripts: true,
            transcript_dir: Some("/tmp/twentyq".to_string()),
        };
        assert_eq!(
            config.resolve_transcript_dir(),
            Some(PathBuf::from("/tmp/twentyq"))
        );
    }

    #[test]
    fn test_disabled_by_default() {
        assert!(!FileLoggingConfig::default().transcripts);
    }
}
