//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on
//! demand.

mod assistant;
mod output;
mod polling;
mod repl;

pub use assistant::{FileAssistantConfig, ResolvedAssistant};
pub use output::FileOutputConfig;
pub use polling::FilePollingConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending value, e.g. `polling.max_attempts`.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(severity: Severity, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Service credentials and endpoint
    pub assistant: FileAssistantConfig,
    /// Run polling cadence and budget
    pub polling: FilePollingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Credentials are not checked here; they may come from the environment
    /// and are resolved separately by [`FileAssistantConfig::resolve`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.polling.to_turn_params().1);

        let base_url = self.assistant.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "assistant.base_url",
                "base_url must not be empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "assistant.base_url",
                format!("base_url '{}' must start with http:// or https://", base_url),
            ));
        }

        if self.assistant.request_timeout_secs == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "assistant.request_timeout_secs",
                "request_timeout_secs must be at least 1",
            ));
        }

        if self.assistant.api_key.is_some() {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "assistant.api_key",
                format!(
                    "API key stored in a config file; prefer the {} environment variable",
                    self.assistant.api_key_env
                ),
            ));
        }

        if self.output.show_search_results && self.output.max_search_results == 0 {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "output.max_search_results",
                "show_search_results is enabled but max_search_results is 0",
            ));
        }

        issues
    }
}
