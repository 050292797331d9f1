//! Error types for the Assistants API adapter

use chat_application::GatewayError;
use thiserror::Error;

/// Result type alias for Assistants API operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to the Assistants API
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) => GatewayError::Other(e.to_string()),
            OpenAiError::Api {
                status: 404,
                message,
            } => GatewayError::NotFound(message),
            OpenAiError::Api { status, message } => GatewayError::Api { status, message },
            e @ OpenAiError::ParseError { .. } => GatewayError::InvalidResponse(e.to_string()),
            e @ OpenAiError::InvalidHeader(_) => GatewayError::Other(e.to_string()),
        }
    }
}
