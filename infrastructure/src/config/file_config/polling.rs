//! Polling configuration from TOML (`[polling]` section)

use super::{ConfigIssue, Severity};
use chat_application::TurnParams;
use chat_domain::PollPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw polling configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollingConfig {
    /// Delay between two run status reads, in milliseconds
    pub interval_ms: u64,
    /// Maximum number of status reads per run
    pub max_attempts: u32,
    /// Optional wall-clock cap per run, in seconds
    pub max_wait_secs: Option<u64>,
    /// Fetch run steps (with file-search content) after each reply
    pub fetch_run_steps: bool,
}

impl Default for FilePollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            max_attempts: 600,
            max_wait_secs: None,
            fetch_run_steps: true,
        }
    }
}

impl FilePollingConfig {
    /// Convert to [`TurnParams`], reporting anything that had to be corrected.
    ///
    /// A zero attempt budget cannot work and falls back to the default.
    pub fn to_turn_params(&self) -> (TurnParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let interval = Duration::from_millis(self.interval_ms);

        if self.interval_ms == 0 {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "polling.interval_ms",
                "interval_ms is 0; runs will be polled without delay",
            ));
        }

        let poll = match PollPolicy::new(interval, self.max_attempts) {
            Ok(policy) => policy,
            Err(e) => {
                issues.push(ConfigIssue::new(
                    Severity::Error,
                    "polling.max_attempts",
                    e.to_string(),
                ));
                PollPolicy::default().with_interval(interval)
            }
        }
        .with_max_wait(self.max_wait_secs.map(Duration::from_secs));

        if self.max_wait_secs == Some(0) {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "polling.max_wait_secs",
                "max_wait_secs is 0; every run will time out after one status check",
            ));
        }

        let params = TurnParams::default()
            .with_poll(poll)
            .with_fetch_run_steps(self.fetch_run_steps);
        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_turn_params() {
        let (params, issues) = FilePollingConfig::default().to_turn_params();
        assert!(issues.is_empty());
        assert_eq!(params, TurnParams::default());
    }

    #[test]
    fn test_custom_values() {
        let config = FilePollingConfig {
            interval_ms: 250,
            max_attempts: 40,
            max_wait_secs: Some(30),
            fetch_run_steps: false,
        };
        let (params, issues) = config.to_turn_params();
        assert!(issues.is_empty());
        assert_eq!(params.poll.interval(), Duration::from_millis(250));
        assert_eq!(params.poll.max_attempts(), 40);
        assert_eq!(params.poll.max_wait(), Some(Duration::from_secs(30)));
        assert!(!params.fetch_run_steps);
    }

    #[test]
    fn test_zero_attempts_is_error() {
        let config = FilePollingConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_turn_params();
        assert_eq!(params.poll.max_attempts(), 600);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].field, "polling.max_attempts");
    }

    #[test]
    fn test_zero_interval_is_warning() {
        let config = FilePollingConfig {
            interval_ms: 0,
            ..Default::default()
        };
        let (_, issues) = config.to_turn_params();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
