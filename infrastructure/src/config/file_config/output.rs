//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print file-search snippets after each reply
    pub show_search_results: bool,
    /// How many file-search results to print
    pub max_search_results: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_search_results: false,
            max_search_results: 3,
        }
    }
}
