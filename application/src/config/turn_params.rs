//! Turn parameters for the use case loop.
//!
//! [`TurnParams`] groups the static parameters that control
//! [`ProcessTurnUseCase`](crate::use_cases::process_turn::ProcessTurnUseCase).
//! They come from the `[polling]` config section.

use chat_domain::PollPolicy;

/// Parameters for processing one conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnParams {
    /// Cadence and budget for waiting on a run.
    pub poll: PollPolicy,
    /// List run steps (with file-search content) after a completed run.
    pub fetch_run_steps: bool,
    /// Page size when looking up the reply message.
    pub reply_lookup_limit: u32,
}

impl Default for TurnParams {
    fn default() -> Self {
        Self {
            poll: PollPolicy::default(),
            fetch_run_steps: true,
            reply_lookup_limit: 20,
        }
    }
}

impl TurnParams {
    pub fn with_poll(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_fetch_run_steps(mut self, fetch: bool) -> Self {
        self.fetch_run_steps = fetch;
        self
    }
}
