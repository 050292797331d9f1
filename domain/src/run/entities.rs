//! Run entity

use super::status::RunStatus;
use crate::core::ids::{AssistantId, RunId, ThreadId};
use serde::{Deserialize, Serialize};

/// Error reported by the service for a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// One assistant pass over a thread (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub thread_id: ThreadId,
    pub assistant_id: AssistantId,
    pub status: RunStatus,
    pub last_error: Option<RunError>,
    /// Reason given by the service when the run ended `incomplete`.
    pub incomplete_reason: Option<String>,
}

impl Run {
    pub fn new(
        id: impl Into<RunId>,
        thread_id: impl Into<ThreadId>,
        assistant_id: impl Into<AssistantId>,
        status: RunStatus,
    ) -> Self {
        Self {
            id: id.into(),
            thread_id: thread_id.into(),
            assistant_id: assistant_id.into(),
            status,
            last_error: None,
            incomplete_reason: None,
        }
    }

    pub fn with_last_error(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.last_error = Some(RunError {
            code: code.into(),
            message: message.into(),
        });
        self
    }

    pub fn with_incomplete_reason(mut self, reason: impl Into<String>) -> Self {
        self.incomplete_reason = Some(reason.into());
        self
    }

    /// Human-readable explanation for a run that did not complete.
    pub fn failure_reason(&self) -> String {
        if let Some(err) = &self.last_error {
            return err.to_string();
        }
        if let Some(reason) = &self.incomplete_reason {
            return reason.clone();
        }
        match self.status {
            RunStatus::RequiresAction => "run requested tool outputs, which are not supported".to_string(),
            RunStatus::Expired => "run expired before completing".to_string(),
            RunStatus::Cancelled => "run was cancelled".to_string(),
            _ => format!("run ended with status {}", self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(status: RunStatus) -> Run {
        Run::new("run_1", "thread_1", "asst_1", status)
    }

    #[test]
    fn test_failure_reason_prefers_last_error() {
        let run = run(RunStatus::Failed).with_last_error("rate_limit_exceeded", "Slow down");
        assert_eq!(run.failure_reason(), "Slow down (rate_limit_exceeded)");
    }

    #[test]
    fn test_failure_reason_uses_incomplete_details() {
        let run = run(RunStatus::Incomplete).with_incomplete_reason("max_completion_tokens");
        assert_eq!(run.failure_reason(), "max_completion_tokens");
    }

    #[test]
    fn test_failure_reason_falls_back_to_status() {
        assert_eq!(
            run(RunStatus::Expired).failure_reason(),
            "run expired before completing"
        );
        assert_eq!(
            run(RunStatus::Failed).failure_reason(),
            "run ended with status failed"
        );
    }
}
