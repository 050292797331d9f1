//! Assistants API gateway implementation

use super::error::{OpenAiError, Result};
use super::protocol::{
    ApiErrorResponse, CreateMessageRequest, CreateRunRequest, CreateThreadRequest, ListResponse,
    MessageObject, RunObject, RunStepObject, ThreadObject,
};
use async_trait::async_trait;
use chat_application::ports::assistant_gateway::{
    AssistantGateway, GatewayError, ListOrder, MessageQuery, StepInclude,
};
use chat_domain::util::truncate_str;
use chat_domain::{AssistantId, Message, Role, Run, RunId, RunStep, StepId, Thread, ThreadId};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Beta header value selecting the v2 Assistants API
const ASSISTANTS_BETA: &str = "assistants=v2";

/// Page size used when listing run steps
const STEP_PAGE_SIZE: u32 = 100;

/// Maximum bytes of a raw body kept in error messages
const RAW_PREVIEW_BYTES: usize = 500;

/// Connection settings for the Assistants API
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl OpenAiClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for OpenAiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Assistant gateway backed by the OpenAI Assistants REST API
pub struct OpenAiAssistantGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiAssistantGateway {
    /// Build an HTTP client carrying the authentication and beta headers
    pub fn new(config: &OpenAiClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| OpenAiError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("OpenAI-Beta", HeaderValue::from_static(ASSISTANTS_BETA));

        if let Some(org) = &config.organization {
            let value = HeaderValue::from_str(org)
                .map_err(|_| OpenAiError::InvalidHeader("OpenAI-Organization"))?;
            headers.insert("OpenAI-Organization", value);
        }
        if let Some(project) = &config.project {
            let value = HeaderValue::from_str(project)
                .map_err(|_| OpenAiError::InvalidHeader("OpenAI-Project"))?;
            headers.insert("OpenAI-Project", value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        info!("OpenAiAssistantGateway initialized ({})", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST without a request body, for action endpoints like cancel
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// Map non-2xx statuses to [`OpenAiError::Api`] and parse the body
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        trace!("HTTP {} body: {}", status.as_u16(), truncate_str(&body, 2000));

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) if body.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                Err(_) => truncate_str(&body, RAW_PREVIEW_BYTES).to_string(),
            };
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| OpenAiError::ParseError {
            error: e.to_string(),
            raw: truncate_str(&body, RAW_PREVIEW_BYTES).to_string(),
        })
    }
}

#[async_trait]
impl AssistantGateway for OpenAiAssistantGateway {
    async fn create_thread(&self) -> std::result::Result<Thread, GatewayError> {
        let thread: ThreadObject = self.post("/threads", &CreateThreadRequest::default()).await?;
        Ok(thread.into())
    }

    async fn create_message(
        &self,
        thread_id: &ThreadId,
        role: Role,
        content: &str,
    ) -> std::result::Result<Message, GatewayError> {
        let path = format!("/threads/{}/messages", thread_id);
        let message: MessageObject = self
            .post(&path, &CreateMessageRequest { role, content })
            .await?;
        Ok(message.into())
    }

    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> std::result::Result<Run, GatewayError> {
        let path = format!("/threads/{}/runs", thread_id);
        let run: RunObject = self
            .post(
                &path,
                &CreateRunRequest {
                    assistant_id: assistant_id.as_str(),
                },
            )
            .await?;
        Ok(run.into())
    }

    async fn retrieve_run(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> std::result::Result<Run, GatewayError> {
        let path = format!("/threads/{}/runs/{}", thread_id, run_id);
        let run: RunObject = self.get(&path, &[]).await?;
        Ok(run.into())
    }

    async fn cancel_run(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> std::result::Result<Run, GatewayError> {
        let path = format!("/threads/{}/runs/{}/cancel", thread_id, run_id);
        let run: RunObject = self.post_empty(&path).await?;
        Ok(run.into())
    }

    async fn list_messages(
        &self,
        thread_id: &ThreadId,
        query: &MessageQuery,
    ) -> std::result::Result<Vec<Message>, GatewayError> {
        let path = format!("/threads/{}/messages", thread_id);
        let mut params = vec![("order", query.order.as_str().to_string())];
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(run_id) = &query.run_id {
            params.push(("run_id", run_id.to_string()));
        }
        let page: ListResponse<MessageObject> = self.get(&path, &params).await?;
        Ok(page.data.into_iter().map(Message::from).collect())
    }

    async fn list_run_steps(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> std::result::Result<Vec<RunStep>, GatewayError> {
        let path = format!("/threads/{}/runs/{}/steps", thread_id, run_id);
        let params = [
            ("order", ListOrder::Asc.as_str().to_string()),
            ("limit", STEP_PAGE_SIZE.to_string()),
        ];
        let page: ListResponse<RunStepObject> = self.get(&path, &params).await?;
        if page.has_more {
            debug!(
                "Run {} has more than {} steps; only the first page is read",
                run_id, STEP_PAGE_SIZE
            );
        }
        Ok(page.data.into_iter().map(RunStep::from).collect())
    }

    async fn retrieve_run_step(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
        step_id: &StepId,
        include: &[StepInclude],
    ) -> std::result::Result<RunStep, GatewayError> {
        let path = format!("/threads/{}/runs/{}/steps/{}", thread_id, run_id, step_id);
        let params: Vec<_> = include
            .iter()
            .map(|i| ("include[]", i.as_str().to_string()))
            .collect();
        let step: RunStepObject = self.get(&path, &params).await?;
        Ok(step.into())
    }
}
