//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod model;
mod output;
mod providers;
mod repl;

pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use twentyq_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and sampling
    pub model: FileModelConfig,
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.to_model_params().1);
        issues.extend(self.providers.openai.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyq_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
name = "gpt-4o"
temperature = 0.3
max_tokens = 200

[providers.openai]
api_key_env = "MY_OPENAI_KEY"
base_url = "http://localhost:11434"
timeout_secs = 30

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/twentyq/history.txt"

[logging]
transcripts = true
transcript_dir = "/tmp/transcripts"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.name, "gpt-4o");
        assert_eq!(config.model.max_tokens, 200);
        assert_eq!(config.providers.openai.api_key_env, "MY_OPENAI_KEY");
        assert_eq!(config.providers.openai.timeout_secs, Some(30));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.logging.transcripts);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[model]
name = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.name, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.model.max_tokens, 150);
        assert_eq!(config.providers.openai.base_url, "https://api.openai.com");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.name, "gpt-4o-mini");
        assert!(config.providers.openai.api_key.is_none());
        assert!(config.output.format.is_none());
        assert!(!config.logging.transcripts);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[model]
name = ""
max_tokens = 0

[providers.openai]
base_url = "localhost"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 3);
    }
}
