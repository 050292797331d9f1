//! Presentation layer for assistant-chat
//!
//! This crate contains the CLI definition, the interactive chat loop,
//! console formatting and the run progress spinner.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, LineOutcome};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
