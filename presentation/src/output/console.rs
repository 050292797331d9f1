//! Console output formatter for chat turns

use chat_domain::{RunStatus, RunStep};
use colored::Colorize;
use std::fmt::Display;

/// Printed when the user leaves the chat
pub const GOODBYE: &str = "Exiting chat. Goodbye!";

/// Formats turn results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the assistant reply.
    ///
    /// The reply line always ends with a newline; printing it with
    /// `println!` leaves a blank line before the next prompt.
    pub fn format_reply(text: &str) -> String {
        format!("Assistant: {}\n", text)
    }

    /// Format a run that settled without a reply
    pub fn format_failure(status: &RunStatus, reason: &str) -> String {
        format!(
            "{} {}",
            format!("Assistant run {}:", status).red().bold(),
            reason
        )
    }

    /// Format an error that aborted the turn
    pub fn format_error(error: &dyn Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Format the first `max` file-search results across `steps`.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn format_search_results(steps: &[RunStep], max: usize) -> Option<String> {
        let blocks: Vec<String> = steps
            .iter()
            .flat_map(RunStep::file_search_results)
            .take(max)
            .map(|result| {
                format!(
                    "{}\n{}\n{}",
                    "Found relevant content:".cyan().bold(),
                    format!("[{} | score {:.2}]", result.file_name, result.score).dimmed(),
                    result.snippet()
                )
            })
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_domain::{FileSearchResult, StepDetails, ToolCallDetail};

    fn search_step(id: &str, hits: &[(&str, &str)]) -> RunStep {
        RunStep {
            id: id.into(),
            run_id: "run_1".into(),
            status: RunStatus::Completed,
            details: StepDetails::ToolCalls(vec![ToolCallDetail::FileSearch {
                id: format!("call_{id}"),
                results: hits
                    .iter()
                    .map(|(name, text)| FileSearchResult {
                        file_id: format!("file_{name}"),
                        file_name: name.to_string(),
                        score: 0.5,
                        content: vec![text.to_string()],
                    })
                    .collect(),
            }]),
        }
    }

    #[test]
    fn test_format_reply_exact() {
        assert_eq!(ConsoleFormatter::format_reply("Hello!"), "Assistant: Hello!\n");
    }

    #[test]
    fn test_format_reply_keeps_multiline_text() {
        assert_eq!(
            ConsoleFormatter::format_reply("line one\nline two"),
            "Assistant: line one\nline two\n"
        );
    }

    #[test]
    fn test_format_failure_mentions_status_and_reason() {
        let line = ConsoleFormatter::format_failure(&RunStatus::Expired, "run expired before completing");
        assert!(line.contains("Assistant run expired:"));
        assert!(line.ends_with("run expired before completing"));
    }

    #[test]
    fn test_search_results_limited() {
        let steps = vec![
            search_step("a", &[("a.pdf", "alpha"), ("b.pdf", "beta")]),
            search_step("b", &[("c.pdf", "gamma")]),
        ];
        let rendered = ConsoleFormatter::format_search_results(&steps, 2).unwrap();
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("beta"));
        assert!(!rendered.contains("gamma"));
        assert_eq!(rendered.matches("Found relevant content:").count(), 2);
    }

    #[test]
    fn test_no_search_results() {
        let steps = vec![RunStep {
            id: "step_1".into(),
            run_id: "run_1".into(),
            status: RunStatus::Completed,
            details: StepDetails::MessageCreation {
                message_id: "msg_1".into(),
            },
        }];
        assert!(ConsoleFormatter::format_search_results(&steps, 3).is_none());
        assert!(ConsoleFormatter::format_search_results(&[], 3).is_none());
    }
}
