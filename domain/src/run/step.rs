//! Run step entities
//!
//! A run step records one thing the assistant did while processing a run:
//! either creating a message or calling tools. Steps are fetched for
//! inspection only and never affect the reply.

use super::status::RunStatus;
use crate::core::ids::{MessageId, RunId, StepId};
use serde::{Deserialize, Serialize};

/// One file-search hit attached to a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSearchResult {
    pub file_id: String,
    pub file_name: String,
    pub score: f64,
    /// Text fragments; only populated when the step was fetched with the
    /// file-search content include option.
    pub content: Vec<String>,
}

impl FileSearchResult {
    /// Fragments joined into a single snippet.
    pub fn snippet(&self) -> String {
        self.content.join("\n")
    }
}

/// A tool invocation recorded on a run step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolCallDetail {
    FileSearch {
        id: String,
        results: Vec<FileSearchResult>,
    },
    CodeInterpreter {
        id: String,
        input: String,
    },
    Function {
        id: String,
        name: String,
        arguments: String,
    },
    Other {
        id: String,
        kind: String,
    },
}

/// What a run step did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepDetails {
    MessageCreation { message_id: MessageId },
    ToolCalls(Vec<ToolCallDetail>),
}

/// A sub-record of a run (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStep {
    pub id: StepId,
    pub run_id: RunId,
    /// Steps share the run status vocabulary.
    pub status: RunStatus,
    pub details: StepDetails,
}

impl RunStep {
    /// File-search results across all tool calls of this step.
    pub fn file_search_results(&self) -> impl Iterator<Item = &FileSearchResult> {
        let calls: &[ToolCallDetail] = match &self.details {
            StepDetails::ToolCalls(calls) => calls,
            StepDetails::MessageCreation { .. } => &[],
        };
        calls.iter().flat_map(|call| match call {
            ToolCallDetail::FileSearch { results, .. } => results.as_slice(),
            _ => &[],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, content: &[&str]) -> FileSearchResult {
        FileSearchResult {
            file_id: format!("file_{name}"),
            file_name: name.to_string(),
            score: 0.8,
            content: content.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_file_search_results_flatten_tool_calls() {
        let step = RunStep {
            id: StepId::new("step_1"),
            run_id: RunId::new("run_1"),
            status: RunStatus::Completed,
            details: StepDetails::ToolCalls(vec![
                ToolCallDetail::FileSearch {
                    id: "call_1".to_string(),
                    results: vec![result("a.md", &["alpha"]), result("b.md", &["beta"])],
                },
                ToolCallDetail::CodeInterpreter {
                    id: "call_2".to_string(),
                    input: "print(1)".to_string(),
                },
                ToolCallDetail::FileSearch {
                    id: "call_3".to_string(),
                    results: vec![result("c.md", &["gamma"])],
                },
            ]),
        };

        let names: Vec<_> = step
            .file_search_results()
            .map(|r| r.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_message_creation_has_no_results() {
        let step = RunStep {
            id: StepId::new("step_2"),
            run_id: RunId::new("run_1"),
            status: RunStatus::Completed,
            details: StepDetails::MessageCreation {
                message_id: MessageId::new("msg_1"),
            },
        };
        assert_eq!(step.file_search_results().count(), 0);
    }

    #[test]
    fn test_snippet_joins_fragments() {
        assert_eq!(result("a.md", &["one", "two"]).snippet(), "one\ntwo");
    }
}
