//! Azure OpenAI configuration and chat-completions client.
//!
//! Configuration comes from environment variables, validated for presence
//! only. The client is a thin blocking wrapper over the deployment's
//! chat-completions endpoint; retries, token refresh, and streaming are out
//! of scope.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120; // Total request timeout (includes connection + transfer)

const DEFAULT_API_VERSION: &str = "2024-12-01-preview";
const DEFAULT_DEPLOYMENT: &str = "gpt-4o-mini";

pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const DEPLOYMENT_VAR: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";

/// Errors from Azure OpenAI configuration and calls
#[derive(Debug, Error)]
pub enum AzureError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat request rejected: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("chat response contained no choices")]
    EmptyResponse,
}

/// Azure OpenAI connection settings, read from the environment
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

impl AzureConfig {
    /// Read configuration from the environment.
    ///
    /// Endpoint and API key are required; the error lists every missing
    /// variable at once. API version and deployment name fall back to
    /// defaults.
    pub fn from_env() -> Result<Self, AzureError> {
        let endpoint = std::env::var(ENDPOINT_VAR).ok().filter(|v| !v.is_empty());
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if endpoint.is_none() {
            missing.push(ENDPOINT_VAR);
        }
        if api_key.is_none() {
            missing.push(API_KEY_VAR);
        }
        let (Some(endpoint), Some(api_key)) = (endpoint, api_key) else {
            return Err(AzureError::MissingEnv(missing));
        };

        Ok(Self {
            endpoint,
            api_key,
            api_version: std::env::var(API_VERSION_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            deployment: std::env::var(DEPLOYMENT_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
        })
    }

    /// URL of the deployment's chat-completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

/// A single chat message on the wire
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: u64,
}

/// Result of a chat call: assistant text plus token accounting
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub content: String,
    pub total_tokens: u64,
}

/// Blocking client for one Azure OpenAI deployment
pub struct AzureClient {
    http: Client,
    config: AzureConfig,
}

impl AzureClient {
    /// Build a client with connect and request timeouts so a stalled
    /// endpoint cannot hang a session indefinitely.
    pub fn new(config: AzureConfig) -> Result<Self, AzureError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent("concierge")
            .build()
            .map_err(AzureError::ClientBuild)?;

        info!(
            "Azure OpenAI client ready: deployment '{}' at {}",
            config.deployment, config.endpoint
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    /// Send a chat-completions request and return the assistant reply
    pub fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<ChatOutcome, AzureError> {
        let url = self.config.chat_completions_url();
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&ChatRequest {
                messages,
                temperature,
                max_tokens,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AzureError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        let total_tokens = parsed.usage.map(|u| u.total_tokens).unwrap_or(0);
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AzureError::EmptyResponse)?;

        Ok(ChatOutcome {
            content,
            total_tokens,
        })
    }

    /// Cheap connectivity probe against the configured deployment
    pub fn test_connection(&self) -> Result<String, AzureError> {
        let messages = [ChatMessage::user("Hello! Just testing the connection.")];
        let outcome = self.chat(&messages, 0.0, 10)?;
        Ok(outcome.content)
    }
}
