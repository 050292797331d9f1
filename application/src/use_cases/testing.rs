//! Scripted in-memory gateway shared by the use case tests.

use crate::ports::assistant_gateway::{
    AssistantGateway, GatewayError, MessageQuery, StepInclude,
};
use async_trait::async_trait;
use chat_domain::{
    AssistantId, ContentBlock, Message, MessageId, Role, Run, RunId, RunStatus, RunStep, StepId,
    Thread, ThreadId,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded call against the fake service.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateThread,
    CreateMessage { role: Role, content: String },
    CreateRun { assistant_id: String },
    RetrieveRun,
    CancelRun,
    ListMessages,
    ListRunSteps,
    RetrieveRunStep { step_id: String, include: Vec<StepInclude> },
}

pub const THREAD: &str = "thread_test";
pub const RUN: &str = "run_test";

/// Fake service that replays a scripted sequence of run statuses.
///
/// When the script runs out, `fallback` is returned forever. The
/// assistant reply is inserted into the thread the first time a
/// `completed` status is served.
pub struct ScriptedGateway {
    calls: Mutex<Vec<Call>>,
    statuses: Mutex<VecDeque<RunStatus>>,
    fallback: RunStatus,
    reply: Option<String>,
    messages: Mutex<Vec<Message>>,
    steps: Vec<RunStep>,
    failing: Option<&'static str>,
    next_message: Mutex<u32>,
}

impl ScriptedGateway {
    pub fn new(statuses: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            statuses: Mutex::new(statuses.iter().map(|s| RunStatus::from(*s)).collect()),
            fallback: RunStatus::InProgress,
            reply: Some("Hello!".to_string()),
            messages: Mutex::new(Vec::new()),
            steps: Vec::new(),
            failing: None,
            next_message: Mutex::new(0),
        }
    }

    pub fn with_reply(mut self, reply: Option<&str>) -> Self {
        self.reply = reply.map(str::to_string);
        self
    }

    pub fn with_steps(mut self, steps: Vec<RunStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Make the named operation return an error.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| call(c)).count()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.failing == Some(operation) {
            return Err(GatewayError::Api {
                status: 500,
                message: format!("{operation} failed"),
            });
        }
        Ok(())
    }

    fn push_message(&self, role: Role, text: &str, run_id: Option<RunId>) -> Message {
        let mut counter = self.next_message.lock().unwrap();
        *counter += 1;
        let message = Message {
            id: MessageId::new(format!("msg_{}", *counter)),
            thread_id: ThreadId::new(THREAD),
            role,
            content: vec![ContentBlock::text(text)],
            created_at: 1_700_000_000 + i64::from(*counter),
            run_id,
        };
        self.messages.lock().unwrap().insert(0, message.clone());
        message
    }

    fn run(&self, status: RunStatus) -> Run {
        Run::new(RUN, THREAD, "asst_test", status)
    }
}

#[async_trait]
impl AssistantGateway for ScriptedGateway {
    async fn create_thread(&self) -> Result<Thread, GatewayError> {
        self.record("create_thread", Call::CreateThread)?;
        Ok(Thread::new(THREAD, 1_700_000_000))
    }

    async fn create_message(
        &self,
        _thread_id: &ThreadId,
        role: Role,
        content: &str,
    ) -> Result<Message, GatewayError> {
        self.record(
            "create_message",
            Call::CreateMessage {
                role,
                content: content.to_string(),
            },
        )?;
        Ok(self.push_message(role, content, None))
    }

    async fn create_run(
        &self,
        _thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> Result<Run, GatewayError> {
        self.record(
            "create_run",
            Call::CreateRun {
                assistant_id: assistant_id.to_string(),
            },
        )?;
        Ok(self.run(RunStatus::Queued))
    }

    async fn retrieve_run(
        &self,
        _thread_id: &ThreadId,
        _run_id: &RunId,
    ) -> Result<Run, GatewayError> {
        self.record("retrieve_run", Call::RetrieveRun)?;
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        if status.is_completed()
            && let Some(reply) = &self.reply
        {
            let already = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .any(|m| m.role == Role::Assistant);
            if !already {
                self.push_message(Role::Assistant, reply, Some(RunId::new(RUN)));
            }
        }
        let run = self.run(status.clone());
        Ok(match status {
            RunStatus::Failed => run.with_last_error("server_error", "Something went wrong"),
            _ => run,
        })
    }

    async fn cancel_run(&self, _thread_id: &ThreadId, _run_id: &RunId) -> Result<Run, GatewayError> {
        self.record("cancel_run", Call::CancelRun)?;
        Ok(self.run(RunStatus::Cancelling))
    }

    async fn list_messages(
        &self,
        _thread_id: &ThreadId,
        query: &MessageQuery,
    ) -> Result<Vec<Message>, GatewayError> {
        self.record("list_messages", Call::ListMessages)?;
        let messages = self.messages.lock().unwrap();
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(messages
            .iter()
            .filter(|m| query.run_id.is_none() || m.run_id == query.run_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_run_steps(
        &self,
        _thread_id: &ThreadId,
        _run_id: &RunId,
    ) -> Result<Vec<RunStep>, GatewayError> {
        self.record("list_run_steps", Call::ListRunSteps)?;
        Ok(self.steps.clone())
    }

    async fn retrieve_run_step(
        &self,
        _thread_id: &ThreadId,
        _run_id: &RunId,
        step_id: &StepId,
        include: &[StepInclude],
    ) -> Result<RunStep, GatewayError> {
        self.record(
            "retrieve_run_step",
            Call::RetrieveRunStep {
                step_id: step_id.to_string(),
                include: include.to_vec(),
            },
        )?;
        self.steps
            .iter()
            .find(|s| &s.id == step_id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(step_id.to_string()))
    }
}
