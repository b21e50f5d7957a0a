//! Configuration issues reported by validation.
//!
//! Adapters validate raw configuration and return structured issues with
//! severity levels instead of failing on the first problem.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name field is present but blank.
    EmptyModelName { field: String },
    /// A numeric field is outside the range the provider accepts.
    ValueOutOfRange { field: String, value: String },
    /// A URL field is blank or not http(s).
    InvalidUrl { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyModelName {
                field: "model.name".to_string(),
            },
            message: "model.name: model name cannot be empty".to_string(),
        };
        assert!(issue.is_error());

        let warning = ConfigIssue {
            severity: Severity::Warning,
            ..issue
        };
        assert!(!warning.is_error());
    }
}
