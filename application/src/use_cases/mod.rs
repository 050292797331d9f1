//! Use cases
//!
//! Application-level operations that orchestrate calls to the assistant
//! service.

pub mod poll_run;
pub mod process_turn;
pub mod start_conversation;

#[cfg(test)]
pub(crate) mod testing;
