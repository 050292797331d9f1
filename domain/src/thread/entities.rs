//! Thread domain entities

use crate::core::ids::{MessageId, RunId, ThreadId};
use serde::{Deserialize, Serialize};

/// A server-side conversation context (Entity)
///
/// Created once at startup and never deleted by this program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    /// Unix timestamp (seconds) at which the service created the thread.
    pub created_at: i64,
}

impl Thread {
    pub fn new(id: impl Into<ThreadId>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }
}

/// Author of a message in a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One block of message content.
///
/// Only text blocks are rendered; anything else (image references,
/// attachments) is kept as an opaque kind so the list stays positionally
/// faithful to the service response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBlock {
    Text { value: String },
    Other { kind: String },
}

impl ContentBlock {
    pub fn text(value: impl Into<String>) -> Self {
        ContentBlock::Text {
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { value } => Some(value),
            ContentBlock::Other { .. } => None,
        }
    }
}

/// A message in a thread (Entity)
///
/// Immutable once created. List responses from the service are ordered
/// newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub thread_id: ThreadId,
    pub role: Role,
    pub content: Vec<ContentBlock>,
    pub created_at: i64,
    /// Run that produced this message (assistant messages only).
    pub run_id: Option<RunId>,
}

impl Message {
    /// Text of the first text block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentBlock::as_text)
    }

    /// All text blocks joined with blank lines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn is_from_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}
