//! Provider configuration from TOML (`[providers]` section)

use crate::openai::gateway::OpenAiSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use twentyq_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can point at any compatible server).
    pub base_url: String,
    /// Request timeout in seconds; unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: None,
        }
    }
}

impl FileOpenAiConfig {
    /// The configured key, or the value of `api_key_env` in the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Connection settings for the gateway, with the API key resolved.
    pub fn to_settings(&self) -> OpenAiSettings {
        OpenAiSettings {
            base_url: self.base_url.trim().to_string(),
            api_key: self.resolve_api_key(),
            api_key_env: self.api_key_env.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidUrl {
                    field: "providers.openai.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                message: format!(
                    "providers.openai.base_url: '{}' is not an http(s) URL",
                    self.base_url
                ),
            });
        }

        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ValueOutOfRange {
                    field: "providers.openai.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                message: "providers.openai.timeout_secs: cannot be 0".to_string(),
            });
        }

        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}
