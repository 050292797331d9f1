//! Configuration errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("No API key configured: set {env} or [assistant].api_key")]
    MissingApiKey { env: String },

    #[error("No assistant id configured: set {env} or [assistant].assistant_id")]
    MissingAssistantId { env: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
