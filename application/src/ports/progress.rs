//! Progress notification port
//!
//! Defines the interface for reporting progress while a turn is processed.

use chat_domain::{Message, Run, RunStatus};

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait TurnProgressNotifier: Send + Sync {
    /// Called once the user message has been stored on the thread
    fn on_message_submitted(&self, _message: &Message) {}

    /// Called once the run has been created
    fn on_run_started(&self, run: &Run);

    /// Called after every status read while polling
    fn on_run_status(&self, status: &RunStatus, attempt: u32);

    /// Called when polling stops, whatever the reason
    fn on_run_finished(&self, status: &RunStatus);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTurnProgress;

impl TurnProgressNotifier for NoTurnProgress {
    fn on_run_started(&self, _run: &Run) {}
    fn on_run_status(&self, _status: &RunStatus, _attempt: u32) {}
    fn on_run_finished(&self, _status: &RunStatus) {}
}
