//! Infrastructure layer for assistant-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAssistantConfig, FileConfig, FileOutputConfig,
    FilePollingConfig, FileReplConfig, ResolvedAssistant, Severity,
};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::{OpenAiAssistantGateway, OpenAiClientConfig},
};
