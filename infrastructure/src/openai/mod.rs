//! OpenAI Assistants API adapter
//!
//! Implements [`AssistantGateway`](chat_application::AssistantGateway) over
//! the Assistants v2 REST endpoints (threads, messages, runs, run steps).

pub mod error;
pub mod gateway;
pub mod protocol;
