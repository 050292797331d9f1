//! Interactive chat module
//!
//! Provides a readline-based chat loop against the configured assistant.

mod repl;

pub use repl::{ChatRepl, LineOutcome};
