//! Assistant service configuration from TOML (`[assistant]` section)

use crate::config::ConfigError;
use crate::openai::gateway::OpenAiClientConfig;
use chat_domain::AssistantId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw assistant configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Assistant to run on every turn.
    pub assistant_id: Option<String>,
    /// Environment variable consulted when `assistant_id` is unset.
    pub assistant_id_env: String,
    /// Direct API key (not recommended; prefer the env var).
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL of the Assistants API.
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            assistant_id: None,
            assistant_id_env: "ASSISTANT_ID".to_string(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: OpenAiClientConfig::DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
            request_timeout_secs: 60,
        }
    }
}

/// Credentials and connection settings ready for the gateway
#[derive(Debug, Clone)]
pub struct ResolvedAssistant {
    pub assistant_id: AssistantId,
    pub client: OpenAiClientConfig,
}

impl FileAssistantConfig {
    /// Resolve credentials from this section and the process environment.
    pub fn resolve(&self) -> Result<ResolvedAssistant, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials using `lookup` for environment variables.
    ///
    /// Values set directly in the file win over the environment. Blank
    /// values count as missing.
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedAssistant, ConfigError> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = non_blank(self.api_key.clone())
            .or_else(|| non_blank(lookup(&self.api_key_env)))
            .ok_or_else(|| ConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            })?;

        let parse_id = |value: Option<String>| {
            value.and_then(|v| AssistantId::try_new(v.trim()).ok())
        };
        let assistant_id = parse_id(self.assistant_id.clone())
            .or_else(|| parse_id(lookup(&self.assistant_id_env)))
            .ok_or_else(|| ConfigError::MissingAssistantId {
                env: self.assistant_id_env.clone(),
            })?;

        let mut client = OpenAiClientConfig::new(api_key.trim())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs));
        if let Some(org) = non_blank(self.organization.clone()) {
            client = client.with_organization(org);
        }
        if let Some(project) = non_blank(self.project.clone()) {
            client = client.with_project(project);
        }

        Ok(ResolvedAssistant {
            assistant_id,
            client,
        })
    }
}
