//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print file-search snippets after each reply
    pub show_search_results: bool,
    /// Maximum number of snippets printed per reply
    pub max_search_results: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_search_results: false,
            max_search_results: 3,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while the assistant is working
    pub show_progress: bool,
    /// Prompt printed before each line of input
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            prompt: "User: ".to_string(),
        }
    }
}
