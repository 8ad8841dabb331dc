//! Configuration validation issues.
//!
//! Loaders collect [`ConfigIssue`]s instead of failing on the first problem,
//! so the binary can print every warning and abort only on errors.

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
    /// A model field was set to an empty string.
    EmptyModelName { field: String },
    /// No API key could be resolved for the model provider.
    MissingApiKey { tried: Vec<String> },
    /// A value could not be parsed (bind address, URL, ...).
    InvalidValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_ignores_warnings() {
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey { tried: vec![] },
            "no key",
        )];
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_detects_error() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::MissingApiKey { tried: vec![] }, "no key"),
            ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "main".to_string(),
                },
                "empty",
            ),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }
}
