//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::{ConsoleFormatter, GOODBYE};
use crate::progress::reporter::ProgressReporter;
use chat_application::{
    ConversationContext, NoTurnProgress, ProcessTurnUseCase, TurnOutcome, TurnResult,
};
use chat_domain::UserInput;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::{self, Write};
use tracing::{debug, info};

/// What happened to one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line; nothing was sent
    Skipped,
    /// A turn was attempted (reply, failure or error already printed)
    Handled,
    /// The user asked to leave
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ProcessTurnUseCase,
    context: ConversationContext,
    repl: ReplConfig,
    output: OutputConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl bound to an open conversation
    pub fn new(use_case: ProcessTurnUseCase, context: ConversationContext) -> Self {
        Self {
            use_case,
            context,
            repl: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.repl = config;
        self
    }

    pub fn with_output_config(mut self, config: OutputConfig) -> Self {
        self.output = config;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.repl.show_progress = show;
        self
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Run the interactive REPL until `exit` or end of input
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;
        info!("Chat started on thread {}", self.context.thread_id());

        loop {
            match rl.readline(&self.repl.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    let outcome = self
                        .handle_line(&line, &mut io::stdout(), &mut io::stderr())
                        .await?;
                    if outcome == LineOutcome::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", GOODBYE);
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Classify and process one line, writing the transcript to `out`
    /// and failures to `err`.
    ///
    /// `exit` is recognised before any remote call is made.
    pub async fn handle_line<W: Write, E: Write>(
        &self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<LineOutcome> {
        let text = match UserInput::parse(line) {
            UserInput::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(LineOutcome::Exit);
            }
            UserInput::Blank => return Ok(LineOutcome::Skipped),
            UserInput::Message(text) => text,
        };

        let result = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_reply_with_progress(&self.context, &text, &progress)
                .await
        } else {
            self.use_case
                .execute_reply_with_progress(&self.context, &text, &NoTurnProgress)
                .await
        };

        let mut result = match result {
            Ok(result) => result,
            Err(e) => {
                writeln!(err, "{}", ConsoleFormatter::format_error(&e))?;
                return Ok(LineOutcome::Handled);
            }
        };
        self.render_outcome(&result, out, err)?;

        // The reply is on screen before run steps are requested
        if result.is_reply() {
            result.steps = self.use_case.fetch_steps(&self.context, &result).await;
            self.render_sources(&result, out)?;
        }
        Ok(LineOutcome::Handled)
    }

    fn render_outcome<W: Write, E: Write>(
        &self,
        result: &TurnResult,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        debug!(
            "Run {} settled as {} after {} status checks",
            result.run.id, result.run.status, result.status_checks
        );

        match &result.outcome {
            TurnOutcome::Reply { text } => {
                writeln!(out, "{}", ConsoleFormatter::format_reply(text))?;
            }
            TurnOutcome::Failed { status, reason } => {
                writeln!(err, "{}", ConsoleFormatter::format_failure(status, reason))?;
            }
        }
        out.flush()
    }

    fn render_sources<W: Write>(&self, result: &TurnResult, out: &mut W) -> io::Result<()> {
        if self.output.show_search_results
            && let Some(sources) = ConsoleFormatter::format_search_results(
                &result.steps,
                self.output.max_search_results,
            )
        {
            writeln!(out, "{}\n", sources)?;
        }
        out.flush()
    }
}
