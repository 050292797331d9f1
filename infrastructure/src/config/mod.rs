//! Configuration file loading for assistant-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `ASSISTANT_CHAT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./assistant-chat.toml` or `./.assistant-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/assistant-chat/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    ConfigIssue, FileAssistantConfig, FileConfig, FileOutputConfig, FilePollingConfig,
    FileReplConfig, ResolvedAssistant, Severity,
};
pub use loader::ConfigLoader;
