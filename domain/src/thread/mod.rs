//! Conversation thread domain.
//!
//! - [`entities::Thread`]: a server-side conversation context
//! - [`entities::Message`]: a single message within a thread

pub mod entities;
