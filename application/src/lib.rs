//! Application layer for assistant-chat
//!
//! This crate contains use cases, port definitions, and turn parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TurnParams;
pub use ports::{
    assistant_gateway::{AssistantGateway, GatewayError, ListOrder, MessageQuery, StepInclude},
    progress::{NoTurnProgress, TurnProgressNotifier},
};
pub use use_cases::poll_run::{PollOutcome, RunPoller};
pub use use_cases::process_turn::{
    ProcessTurnError, ProcessTurnUseCase, TurnOutcome, TurnResult,
};
pub use use_cases::start_conversation::{
    ConversationContext, StartConversationError, StartConversationUseCase,
};
