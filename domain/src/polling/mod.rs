//! Poll policy value object.
//!
//! Waiting for a run is a blocking wait on a remote state transition. The
//! policy bounds that wait so a run that never reaches a terminal status
//! cannot hang the chat loop.

use crate::core::error::DomainError;
use std::time::Duration;

/// Fixed-cadence, bounded polling (Value Object)
///
/// | Field | Default |
/// |-------|---------|
/// | `interval` | 1 s |
/// | `max_attempts` | 600 |
/// | `max_wait` | none |
///
/// The attempt budget is always at least one; [`PollPolicy::new`] is the
/// only way to choose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_attempts: u32,
    max_wait: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 600,
            max_wait: None,
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Result<Self, DomainError> {
        if max_attempts == 0 {
            return Err(DomainError::InvalidPollPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            interval,
            max_attempts,
            max_wait: None,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Delay between two status reads.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Maximum number of status reads for one run.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Optional wall-clock cap across all attempts.
    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    /// Whether another status read is allowed after `attempts` reads that
    /// took `elapsed` in total.
    pub fn allows_another(&self, attempts: u32, elapsed: Duration) -> bool {
        if attempts >= self.max_attempts {
            return false;
        }
        match self.max_wait {
            Some(max_wait) => elapsed + self.interval <= max_wait,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval(), Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 600);
        assert!(policy.max_wait().is_none());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(matches!(
            PollPolicy::new(Duration::from_millis(10), 0),
            Err(DomainError::InvalidPollPolicy(_))
        ));
    }

    #[test]
    fn test_interval_change_keeps_budget() {
        let policy = PollPolicy::new(Duration::from_secs(1), 7)
            .unwrap()
            .with_interval(Duration::from_millis(200));
        assert_eq!(policy.interval(), Duration::from_millis(200));
        assert_eq!(policy.max_attempts(), 7);
    }

    #[test]
    fn test_attempt_budget() {
        let policy = PollPolicy::new(Duration::from_secs(1), 3).unwrap();
        assert!(policy.allows_another(1, Duration::ZERO));
        assert!(policy.allows_another(2, Duration::ZERO));
        assert!(!policy.allows_another(3, Duration::ZERO));
    }

    #[test]
    fn test_max_wait_budget() {
        let policy = PollPolicy::new(Duration::from_secs(1), 100)
            .unwrap()
            .with_max_wait(Some(Duration::from_secs(5)));
        assert!(policy.allows_another(1, Duration::from_secs(4)));
        assert!(!policy.allows_another(1, Duration::from_millis(4500)));
    }
}
