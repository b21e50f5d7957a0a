//! Model configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};
use twentyq_application::ModelParams;
use twentyq_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gpt-4o-mini"
/// temperature = 0.7
/// max_tokens = 150
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the provider
    pub name: String,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens per reply
    pub max_tokens: u32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        let params = ModelParams::default();
        Self {
            name: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

impl FileModelConfig {
    /// Convert to request parameters, collecting issues for invalid values.
    pub fn to_model_params(&self) -> (ModelParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let defaults = ModelParams::default();

        let model = if self.name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyModelName {
                    field: "model.name".to_string(),
                },
                message: "model.name: model name cannot be empty".to_string(),
            });
            defaults.model
        } else {
            self.name.trim().to_string()
        };

        let temperature = if (0.0..=2.0).contains(&self.temperature) {
            self.temperature
        } else {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ValueOutOfRange {
                    field: "model.temperature".to_string(),
                    value: self.temperature.to_string(),
                },
                message: format!(
                    "model.temperature: {} is outside 0.0-2.0, falling back to {}",
                    self.temperature, defaults.temperature
                ),
            });
            defaults.temperature
        };

        let max_tokens = if self.max_tokens == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ValueOutOfRange {
                    field: "model.max_tokens".to_string(),
                    value: "0".to_string(),
                },
                message: "model.max_tokens: must be greater than 0".to_string(),
            });
            defaults.max_tokens
        } else {
            self.max_tokens
        };

        (
            ModelParams {
                model,
                temperature,
                max_tokens,
            },
            issues,
        )
    }
}
