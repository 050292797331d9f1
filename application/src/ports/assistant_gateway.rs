//! Assistant Gateway port
//!
//! Defines the interface to the hosted assistant service: threads,
//! messages, runs and run steps. The service owns all of these objects;
//! the application only refers to them by identifier.

use async_trait::async_trait;
use chat_domain::{
    AssistantId, Message, Role, Run, RunId, RunStep, StepId, Thread, ThreadId,
};
use thiserror::Error;

/// Errors that can occur during assistant gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Sort order for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    #[default]
    Desc,
    Asc,
}

impl ListOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOrder::Desc => "desc",
            ListOrder::Asc => "asc",
        }
    }
}

/// Parameters for listing the messages of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageQuery {
    pub order: ListOrder,
    pub limit: Option<u32>,
    /// Only return messages produced by this run.
    pub run_id: Option<RunId>,
}

impl MessageQuery {
    pub fn newest_first() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn for_run(mut self, run_id: &RunId) -> Self {
        self.run_id = Some(run_id.clone());
        self
    }
}

/// Optional nested content to expand when retrieving a run step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepInclude {
    /// Text content of every file-search result.
    FileSearchResultContent,
}

impl StepInclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepInclude::FileSearchResultContent => {
                "step_details.tool_calls[*].file_search.results[*].content"
            }
        }
    }
}

/// Gateway for the hosted assistant service
///
/// This port defines how the application layer talks to the service.
/// Implementations (adapters) live in the infrastructure layer; tests use
/// scripted fakes.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Create a new, empty conversation thread
    async fn create_thread(&self) -> Result<Thread, GatewayError>;

    /// Append a message to a thread
    async fn create_message(
        &self,
        thread_id: &ThreadId,
        role: Role,
        content: &str,
    ) -> Result<Message, GatewayError>;

    /// Start a run of the assistant on a thread
    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> Result<Run, GatewayError>;

    /// Read the current state of a run
    async fn retrieve_run(&self, thread_id: &ThreadId, run_id: &RunId)
    -> Result<Run, GatewayError>;

    /// Ask the service to cancel an in-progress run
    async fn cancel_run(&self, thread_id: &ThreadId, run_id: &RunId) -> Result<Run, GatewayError>;

    /// List messages of a thread
    async fn list_messages(
        &self,
        thread_id: &ThreadId,
        query: &MessageQuery,
    ) -> Result<Vec<Message>, GatewayError>;

    /// List the steps of a run
    async fn list_run_steps(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> Result<Vec<RunStep>, GatewayError>;

    /// Read a single run step, expanding the requested nested content
    async fn retrieve_run_step(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
        step_id: &StepId,
        include: &[StepInclude],
    ) -> Result<RunStep, GatewayError>;
}
