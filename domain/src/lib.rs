//! Domain layer for assistant-chat
//!
//! This crate contains the entities and value objects that describe a
//! conversation with a hosted assistant. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Thread
//!
//! A server-side conversation context. The chat loop creates exactly one
//! thread at startup and keeps its identifier for the process lifetime.
//!
//! ## Run
//!
//! A unit of work meaning "the assistant is processing the thread". Each
//! user turn starts one run and waits until it reaches a terminal
//! [`RunStatus`]. How long that wait may take is governed by a
//! [`PollPolicy`].
//!
//! ## Run steps
//!
//! Sub-records of a run. They may carry tool-call details such as
//! file-search results and are exposed for inspection only.

pub mod core;
pub mod interaction;
pub mod polling;
pub mod run;
pub mod thread;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    ids::{AssistantId, MessageId, RunId, StepId, ThreadId},
};
pub use interaction::UserInput;
pub use polling::PollPolicy;
pub use run::{
    entities::{Run, RunError},
    status::RunStatus,
    step::{FileSearchResult, RunStep, StepDetails, ToolCallDetail},
};
pub use thread::entities::{ContentBlock, Message, Role, Thread};
