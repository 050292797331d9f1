//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a run is in progress
    pub show_progress: bool,
    /// Prompt printed before each user line
    pub prompt: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            prompt: "User: ".to_string(),
        }
    }
}
