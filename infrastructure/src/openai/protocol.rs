//! Assistants API wire types
//!
//! Request bodies and response objects as the service sends them, plus
//! conversion into domain entities. Response types are lenient: fields
//! this program does not use are ignored, and unknown content or tool
//! kinds are kept as "other" instead of failing the whole response.

use chat_domain::{
    ContentBlock, FileSearchResult, Message, MessageId, Role, Run, RunStatus, RunStep,
    StepDetails, Thread, ToolCallDetail,
};
use serde::{Deserialize, Serialize};

// ==================== Requests ====================

/// `POST /threads`
#[derive(Debug, Default, Serialize)]
pub struct CreateThreadRequest {}

/// `POST /threads/{thread_id}/messages`
#[derive(Debug, Serialize)]
pub struct CreateMessageRequest<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// `POST /threads/{thread_id}/runs`
#[derive(Debug, Serialize)]
pub struct CreateRunRequest<'a> {
    pub assistant_id: &'a str,
}

// ==================== Responses ====================

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadObject {
    pub id: String,
    pub created_at: i64,
}

impl From<ThreadObject> for Thread {
    fn from(wire: ThreadObject) -> Self {
        Thread::new(wire.id, wire.created_at)
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageObject {
    pub id: String,
    pub thread_id: String,
    pub role: Role,
    #[serde(default)]
    pub content: Vec<ContentPart>,
    pub created_at: i64,
    #[serde(default)]
    pub run_id: Option<String>,
}

/// One entry of `message.content`
#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextContent>,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    pub value: String,
}

impl From<ContentPart> for ContentBlock {
    fn from(part: ContentPart) -> Self {
        match (part.kind.as_str(), part.text) {
            ("text", Some(text)) => ContentBlock::Text { value: text.value },
            _ => ContentBlock::Other { kind: part.kind },
        }
    }
}

impl From<MessageObject> for Message {
    fn from(wire: MessageObject) -> Self {
        Message {
            id: MessageId::new(wire.id),
            thread_id: wire.thread_id.into(),
            role: wire.role,
            content: wire.content.into_iter().map(ContentBlock::from).collect(),
            created_at: wire.created_at,
            run_id: wire.run_id.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunObject {
    pub id: String,
    pub thread_id: String,
    pub assistant_id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub last_error: Option<LastError>,
    #[serde(default)]
    pub incomplete_details: Option<IncompleteDetails>,
}

#[derive(Debug, Deserialize)]
pub struct LastError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct IncompleteDetails {
    #[serde(default)]
    pub reason: Option<String>,
}

impl From<RunObject> for Run {
    fn from(wire: RunObject) -> Self {
        let mut run = Run::new(wire.id, wire.thread_id, wire.assistant_id, wire.status);
        if let Some(err) = wire.last_error {
            run = run.with_last_error(err.code, err.message);
        }
        if let Some(reason) = wire.incomplete_details.and_then(|d| d.reason) {
            run = run.with_incomplete_reason(reason);
        }
        run
    }
}

#[derive(Debug, Deserialize)]
pub struct RunStepObject {
    pub id: String,
    pub run_id: String,
    pub status: RunStatus,
    pub step_details: StepDetailsObject,
}

#[derive(Debug, Deserialize)]
pub struct StepDetailsObject {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message_creation: Option<MessageCreation>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCallObject>,
}

#[derive(Debug, Deserialize)]
pub struct MessageCreation {
    pub message_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub file_search: Option<FileSearchObject>,
    #[serde(default)]
    pub code_interpreter: Option<CodeInterpreterObject>,
    #[serde(default)]
    pub function: Option<FunctionObject>,
}

#[derive(Debug, Deserialize)]
pub struct FileSearchObject {
    #[serde(default)]
    pub results: Vec<FileSearchResultObject>,
}

#[derive(Debug, Deserialize)]
pub struct FileSearchResultObject {
    pub file_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub score: f64,
    /// Present only when requested through the `include[]` query option
    #[serde(default)]
    pub content: Vec<ResultContentObject>,
}

#[derive(Debug, Deserialize)]
pub struct ResultContentObject {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CodeInterpreterObject {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Deserialize)]
pub struct FunctionObject {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

impl From<ToolCallObject> for ToolCallDetail {
    fn from(wire: ToolCallObject) -> Self {
        match wire.kind.as_str() {
            "file_search" => ToolCallDetail::FileSearch {
                id: wire.id,
                results: wire
                    .file_search
                    .map(|fs| fs.results)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|r| FileSearchResult {
                        file_id: r.file_id,
                        file_name: r.file_name,
                        score: r.score,
                        content: r
                            .content
                            .into_iter()
                            .filter(|c| c.kind == "text")
                            .filter_map(|c| c.text)
                            .collect(),
                    })
                    .collect(),
            },
            "code_interpreter" => ToolCallDetail::CodeInterpreter {
                id: wire.id,
                input: wire.code_interpreter.map(|ci| ci.input).unwrap_or_default(),
            },
            "function" => match wire.function {
                Some(f) => ToolCallDetail::Function {
                    id: wire.id,
                    name: f.name,
                    arguments: f.arguments,
                },
                None => ToolCallDetail::Other {
                    id: wire.id,
                    kind: wire.kind,
                },
            },
            _ => ToolCallDetail::Other {
                id: wire.id,
                kind: wire.kind,
            },
        }
    }
}

impl From<RunStepObject> for RunStep {
    fn from(wire: RunStepObject) -> Self {
        let details = match (wire.step_details.kind.as_str(), wire.step_details.message_creation) {
            ("message_creation", Some(mc)) => StepDetails::MessageCreation {
                message_id: mc.message_id.into(),
            },
            _ => StepDetails::ToolCalls(
                wire.step_details
                    .tool_calls
                    .into_iter()
                    .map(ToolCallDetail::from)
                    .collect(),
            ),
        };
        RunStep {
            id: wire.id.into(),
            run_id: wire.run_id.into(),
            status: wire.status,
            details,
        }
    }
}
