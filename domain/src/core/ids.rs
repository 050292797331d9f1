//! Opaque identifiers for objects owned by the remote assistant service.
//!
//! The service hands out string identifiers (`thread_...`, `run_...`).
//! Each kind gets its own newtype so a run id can never be passed where a
//! thread id is expected.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier without validation.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates the identifier, rejecting blank input.
            pub fn try_new(id: impl Into<String>) -> Result<Self, DomainError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(DomainError::EmptyIdentifier($kind));
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a server-side conversation thread.
    ThreadId,
    "thread"
);
opaque_id!(
    /// Identifier of a message within a thread.
    MessageId,
    "message"
);
opaque_id!(
    /// Identifier of a run on a thread.
    RunId,
    "run"
);
opaque_id!(
    /// Identifier of a step within a run.
    StepId,
    "run step"
);
opaque_id!(
    /// Identifier of the configured assistant.
    AssistantId,
    "assistant"
);
