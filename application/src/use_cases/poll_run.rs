//! Bounded polling of a run until it stops moving.
//!
//! Reads the run status at a fixed cadence. Polling stops as soon as the
//! status is terminal or `requires_action`, or when the [`PollPolicy`]
//! budget is spent. No backoff: every wait is exactly the policy interval.

use crate::ports::assistant_gateway::{AssistantGateway, GatewayError};
use crate::ports::progress::TurnProgressNotifier;
use chat_domain::{PollPolicy, Run, RunId, ThreadId};
use tokio::time::Instant;
use tracing::{debug, trace};

/// How polling ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The run reached a status that will not change without client action.
    Settled { run: Run, attempts: u32 },
    /// The budget ran out while the run was still moving.
    TimedOut { last: Run, attempts: u32 },
}

/// Polls one run against an [`AssistantGateway`].
pub struct RunPoller<'a> {
    gateway: &'a dyn AssistantGateway,
    policy: PollPolicy,
}

impl<'a> RunPoller<'a> {
    pub fn new(gateway: &'a dyn AssistantGateway, policy: PollPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Poll until the run settles or the budget is exhausted.
    ///
    /// The first status read happens immediately; later reads are spaced
    /// by the policy interval.
    pub async fn wait(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<PollOutcome, GatewayError> {
        let started = Instant::now();
        let mut attempts = 0u32;

        loop {
            let run = self.gateway.retrieve_run(thread_id, run_id).await?;
            attempts += 1;
            progress.on_run_status(&run.status, attempts);
            trace!("Run {} status {} (attempt {})", run_id, run.status, attempts);

            if run.status.is_terminal() || run.status.requires_action() {
                debug!(
                    "Run {} settled as {} after {} status checks",
                    run_id, run.status, attempts
                );
                return Ok(PollOutcome::Settled { run, attempts });
            }

            if !self.policy.allows_another(attempts, started.elapsed()) {
                return Ok(PollOutcome::TimedOut { last: run, attempts });
            }

            tokio::time::sleep(self.policy.interval()).await;
        }
    }
}
