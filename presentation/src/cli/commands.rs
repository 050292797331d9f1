//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for assistant-chat
#[derive(Parser, Debug)]
#[command(name = "assistant-chat")]
#[command(author, version, about = "Chat with a hosted OpenAI assistant from the terminal")]
#[command(long_about = r#"
assistant-chat opens one conversation thread with a pre-configured
OpenAI assistant and relays each line you type to it. Type `exit` (or
press Ctrl-D) to leave.

Credentials are read from the environment by default:
  OPENAI_API_KEY   API key
  ASSISTANT_ID     Assistant to talk to

Configuration files are loaded from (in priority order):
1. ASSISTANT_CHAT_<SECTION>__<KEY>              Environment overrides
2. --config <path>                              Explicit config file
3. ./assistant-chat.toml                        Project-level config
4. ~/.config/assistant-chat/config.toml         Global config

Example:
  assistant-chat
  assistant-chat -v --show-sources
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print file-search snippets after each reply
    #[arg(long)]
    pub show_sources: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
