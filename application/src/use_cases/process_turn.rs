//! Process Turn use case.
//!
//! Drives one conversational exchange end-to-end:
//!
//! 1. Store the user text as a `user` message on the thread
//! 2. Start a run for the configured assistant
//! 3. Poll the run at a fixed cadence until it settles (bounded)
//! 4. Fetch the newest assistant message produced by the run
//! 5. Optionally fetch the run steps, expanding file-search content
//!
//! Every terminal status is handled explicitly. A completed run yields
//! [`TurnOutcome::Reply`]; any other settled status yields
//! [`TurnOutcome::Failed`]. Running out of poll budget is an error.

use crate::config::TurnParams;
use crate::ports::assistant_gateway::{AssistantGateway, GatewayError, MessageQuery, StepInclude};
use crate::ports::progress::{NoTurnProgress, TurnProgressNotifier};
use crate::use_cases::poll_run::{PollOutcome, RunPoller};
use crate::use_cases::start_conversation::ConversationContext;
use chat_domain::util::log_preview;
use chat_domain::{DomainError, Role, Run, RunId, RunStatus, RunStep};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while processing a turn.
#[derive(Error, Debug)]
pub enum ProcessTurnError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Run {run_id} still {status} after {attempts} status checks; cancelled")]
    PollTimeout {
        run_id: RunId,
        status: RunStatus,
        attempts: u32,
    },

    #[error("Run {0} completed without a text reply")]
    EmptyReply(RunId),
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The run completed and produced this reply text.
    Reply { text: String },
    /// The run settled in a non-completed status.
    Failed { status: RunStatus, reason: String },
}

/// Everything a turn produced.
///
/// Run steps are exposed for the caller to inspect or render; the use case
/// itself never prints them.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub run: Run,
    pub outcome: TurnOutcome,
    pub steps: Vec<RunStep>,
    /// Number of status reads made while polling.
    pub status_checks: u32,
}

impl TurnResult {
    pub fn reply(&self) -> Option<&str> {
        match &self.outcome {
            TurnOutcome::Reply { text } => Some(text),
            TurnOutcome::Failed { .. } => None,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Reply { .. })
    }
}

/// Use case for processing one user turn.
#[derive(Clone)]
pub struct ProcessTurnUseCase {
    gateway: Arc<dyn AssistantGateway>,
    params: TurnParams,
}

impl ProcessTurnUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self {
            gateway,
            params: TurnParams::default(),
        }
    }

    pub fn with_params(mut self, params: TurnParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &TurnParams {
        &self.params
    }

    /// Execute the turn without progress reporting
    pub async fn execute(
        &self,
        context: &ConversationContext,
        text: &str,
    ) -> Result<TurnResult, ProcessTurnError> {
        self.execute_with_progress(context, text, &NoTurnProgress)
            .await
    }

    /// Execute the turn with progress callbacks, run steps included
    pub async fn execute_with_progress(
        &self,
        context: &ConversationContext,
        text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnResult, ProcessTurnError> {
        let mut result = self
            .execute_reply_with_progress(context, text, progress)
            .await?;
        result.steps = self.fetch_steps(context, &result).await;
        Ok(result)
    }

    /// Execute the turn up to the reply; `steps` is left empty.
    ///
    /// Callers that show the reply before the sources follow up with
    /// [`fetch_steps`](Self::fetch_steps).
    pub async fn execute_reply_with_progress(
        &self,
        context: &ConversationContext,
        text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnResult, ProcessTurnError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }
        let thread_id = context.thread_id();
        info!("Processing turn: {}", log_preview(text, 80));

        let message = self
            .gateway
            .create_message(thread_id, Role::User, text)
            .await?;
        debug!("Stored user message {}", message.id);
        progress.on_message_submitted(&message);

        let run = self
            .gateway
            .create_run(thread_id, context.assistant_id())
            .await?;
        info!("Started run {} on thread {}", run.id, thread_id);
        progress.on_run_started(&run);

        let poller = RunPoller::new(self.gateway.as_ref(), self.params.poll);
        let outcome = poller.wait(thread_id, &run.id, progress).await;
        let (run, status_checks) = match outcome {
            Ok(PollOutcome::Settled { run, attempts }) => (run, attempts),
            Ok(PollOutcome::TimedOut { last, attempts }) => {
                progress.on_run_finished(&last.status);
                warn!(
                    "Run {} did not settle after {} status checks; cancelling",
                    last.id, attempts
                );
                self.cancel_quietly(context, &last.id).await;
                return Err(ProcessTurnError::PollTimeout {
                    run_id: last.id,
                    status: last.status,
                    attempts,
                });
            }
            Err(e) => {
                progress.on_run_finished(&run.status);
                return Err(e.into());
            }
        };
        progress.on_run_finished(&run.status);

        if !run.status.is_completed() {
            if run.status.requires_action() {
                self.cancel_quietly(context, &run.id).await;
            }
            let reason = run.failure_reason();
            warn!("Run {} ended as {}: {}", run.id, run.status, reason);
            return Ok(TurnResult {
                outcome: TurnOutcome::Failed {
                    status: run.status.clone(),
                    reason,
                },
                run,
                steps: Vec::new(),
                status_checks,
            });
        }

        let text = self.fetch_reply(context, &run).await?;

        Ok(TurnResult {
            run,
            outcome: TurnOutcome::Reply { text },
            steps: Vec::new(),
            status_checks,
        })
    }

    /// Run steps for a replied turn, or nothing when step fetching is off
    /// or the run did not complete.
    pub async fn fetch_steps(
        &self,
        context: &ConversationContext,
        result: &TurnResult,
    ) -> Vec<RunStep> {
        if !self.params.fetch_run_steps || !result.is_reply() {
            return Vec::new();
        }
        self.expand_steps(context, &result.run).await
    }

    /// Newest assistant message of the run, text blocks joined.
    async fn fetch_reply(
        &self,
        context: &ConversationContext,
        run: &Run,
    ) -> Result<String, ProcessTurnError> {
        let query = MessageQuery::newest_first()
            .with_limit(self.params.reply_lookup_limit)
            .for_run(&run.id);
        let messages = self
            .gateway
            .list_messages(context.thread_id(), &query)
            .await?;

        let text = messages
            .iter()
            .find(|m| m.is_from_assistant())
            .map(|m| m.text())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProcessTurnError::EmptyReply(run.id.clone()))?;

        debug!("Reply for run {}: {}", run.id, log_preview(&text, 80));
        Ok(text)
    }

    /// Run steps with file-search content expanded.
    ///
    /// Failures here are logged and yield whatever was fetched so far; the
    /// reply is already in hand.
    async fn expand_steps(&self, context: &ConversationContext, run: &Run) -> Vec<RunStep> {
        let thread_id = context.thread_id();
        let listed = match self.gateway.list_run_steps(thread_id, &run.id).await {
            Ok(steps) => steps,
            Err(e) => {
                warn!("Could not list steps for run {}: {}", run.id, e);
                return Vec::new();
            }
        };

        let mut steps = Vec::with_capacity(listed.len());
        for step in listed {
            match self
                .gateway
                .retrieve_run_step(
                    thread_id,
                    &run.id,
                    &step.id,
                    &[StepInclude::FileSearchResultContent],
                )
                .await
            {
                Ok(detail) => steps.push(detail),
                Err(e) => {
                    warn!("Could not retrieve run step {}: {}", step.id, e);
                    steps.push(step);
                }
            }
        }
        debug!("Fetched {} steps for run {}", steps.len(), run.id);
        steps
    }

    async fn cancel_quietly(&self, context: &ConversationContext, run_id: &RunId) {
        if let Err(e) = self.gateway.cancel_run(context.thread_id(), run_id).await {
            warn!("Could not cancel run {}: {}", run_id, e);
        }
    }
}
