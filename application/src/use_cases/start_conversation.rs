//! Start Conversation use case.
//!
//! Creates the one thread the chat loop talks on and packages it with the
//! assistant identifier into a [`ConversationContext`].

use crate::ports::assistant_gateway::{AssistantGateway, GatewayError};
use chat_domain::{AssistantId, Thread, ThreadId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while starting a conversation.
#[derive(Error, Debug)]
pub enum StartConversationError {
    #[error("Could not create conversation thread: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Explicit per-process conversation state.
///
/// Built once at startup and passed by reference into every turn. The
/// thread identifier cannot be replaced after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationContext {
    thread: Thread,
    assistant_id: AssistantId,
}

impl ConversationContext {
    pub fn new(thread: Thread, assistant_id: AssistantId) -> Self {
        Self {
            thread,
            assistant_id,
        }
    }

    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread.id
    }

    pub fn assistant_id(&self) -> &AssistantId {
        &self.assistant_id
    }
}

/// Use case for opening the conversation thread.
pub struct StartConversationUseCase {
    gateway: Arc<dyn AssistantGateway>,
}

impl StartConversationUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        assistant_id: AssistantId,
    ) -> Result<ConversationContext, StartConversationError> {
        let thread = self.gateway.create_thread().await?;
        info!(
            "Opened thread {} for assistant {}",
            thread.id, assistant_id
        );
        Ok(ConversationContext::new(thread, assistant_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{Call, ScriptedGateway, THREAD};

    #[tokio::test]
    async fn test_creates_exactly_one_thread() {
        let gateway = Arc::new(ScriptedGateway::new(&[]));
        let use_case = StartConversationUseCase::new(gateway.clone());

        let context = use_case
            .execute(AssistantId::new("asst_test"))
            .await
            .unwrap();

        assert_eq!(context.thread_id().as_str(), THREAD);
        assert_eq!(context.assistant_id().as_str(), "asst_test");
        assert_eq!(gateway.calls(), vec![Call::CreateThread]);
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = Arc::new(ScriptedGateway::new(&[]).failing_on("create_thread"));
        let use_case = StartConversationUseCase::new(gateway);

        let err = use_case
            .execute(AssistantId::new("asst_test"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StartConversationError::GatewayError(GatewayError::Api { status: 500, .. })
        ));
    }
}
