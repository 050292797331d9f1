//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Identifier must not be empty: {0}")]
    EmptyIdentifier(&'static str),

    #[error("Message text must not be empty")]
    EmptyMessage,

    #[error("Invalid poll policy: {0}")]
    InvalidPollPolicy(String),
}
