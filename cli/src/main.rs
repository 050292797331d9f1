//! CLI entrypoint for assistant-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chat_application::{AssistantGateway, ProcessTurnUseCase, StartConversationUseCase};
use chat_infrastructure::{ConfigLoader, FileConfig, OpenAiAssistantGateway, Severity};
use chat_presentation::{ChatRepl, Cli, OutputConfig, ReplConfig};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // `.env` can supply credentials as well as ASSISTANT_CHAT_* overrides
    ConfigLoader::load_dotenv();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting assistant-chat");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let resolved = config
        .assistant
        .resolve()
        .context("Missing credentials")?;
    let (params, _) = config.polling.to_turn_params();

    // === Dependency Injection ===
    let gateway: Arc<dyn AssistantGateway> = Arc::new(
        OpenAiAssistantGateway::new(&resolved.client)
            .context("Failed to build Assistants API client")?,
    );

    let context = StartConversationUseCase::new(Arc::clone(&gateway))
        .execute(resolved.assistant_id)
        .await
        .context("Failed to start conversation")?;

    let use_case = ProcessTurnUseCase::new(gateway).with_params(params);

    let repl = ChatRepl::new(use_case, context)
        .with_repl_config(ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            prompt: config.repl.prompt.clone(),
        })
        .with_output_config(OutputConfig {
            color: config.output.color,
            show_search_results: config.output.show_search_results || cli.show_sources,
            max_search_results: config.output.max_search_results,
        });

    repl.run().await?;
    Ok(())
}

/// Log warnings and abort on errors found in the loaded configuration
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue);
    }

    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
