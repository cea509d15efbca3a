//! Structured-output chat-completion client.
//!
//! Two interchangeable providers (OpenAI and Groq) implement the same
//! OpenAI-compatible wire contract; callers pick one with a `ProviderKind`
//! flag and depend only on `StructuredClient`. One outbound call per
//! invocation: no retry, no provider fallback, no caching.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ProviderCredentials};
use crate::error::AnalysisError;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Substitution point every prompt template must carry.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Mode for LLM invocation: mock (deterministic, offline) or live (calls the
/// external API).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LlmMode {
    #[default]
    Mock,
    Live,
}

impl LlmMode {
    /// "live" selects the network path; anything else is mock.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "live" => LlmMode::Live,
            _ => LlmMode::Mock,
        }
    }
}

/// Caller-supplied provider selection flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Groq,
}

// OpenAI-compatible request/response structures (Groq speaks the same dialect).
#[derive(Serialize)]
pub(crate) struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format: &'static str,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// One chat-completion backend. Both implementations share the wire dialect;
/// they differ only in endpoint and credential.
#[async_trait::async_trait]
pub(crate) trait CompletionProvider: Send + Sync {
    /// Provider label for logs.
    fn name(&self) -> &'static str;

    /// Sends one request and returns the first choice's message content.
    async fn chat(&self, request: &ChatRequest) -> Result<String, AnalysisError>;
}

pub(crate) struct OpenAiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, AnalysisError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredentials("OPENAI_API_KEY"))?;
        post_chat(&self.client, OPENAI_API_BASE, key, request).await
    }
}

pub(crate) struct GroqProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

#[async_trait::async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, AnalysisError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredentials("GROQ_API_KEY"))?;
        post_chat(&self.client, GROQ_API_BASE, key, request).await
    }
}

/// Shared transport: POST the request, check status, extract the first choice.
async fn post_chat(
    client: &reqwest::Client,
    base: &str,
    api_key: &str,
    request: &ChatRequest,
) -> Result<String, AnalysisError> {
    let url = format!("{}/chat/completions", base);
    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AnalysisError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: ChatResponse = response.json().await?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(AnalysisError::EmptyReply)
}

/// Renders a prompt template, issues one chat completion against the selected
/// provider, and (for the structured path) deserializes the reply strictly
/// against the target schema.
pub struct StructuredClient {
    openai: OpenAiProvider,
    groq: GroqProvider,
}

impl StructuredClient {
    /// Builds both providers from startup-resolved credentials. One shared
    /// HTTP client, 60 s timeout.
    pub fn new(credentials: &ProviderCredentials) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            openai: OpenAiProvider {
                client: client.clone(),
                api_key: credentials.openai_api_key.clone(),
            },
            groq: GroqProvider {
                client,
                api_key: credentials.groq_api_key.clone(),
            },
        }
    }

    fn provider(&self, kind: ProviderKind) -> &dyn CompletionProvider {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Groq => &self.groq,
        }
    }

    /// Structured path: reply must deserialize into `T`. Numeric-range checks
    /// live on the schema types, not here; the provider-side JSON mode is
    /// relied upon for field presence.
    pub async fn complete<T: DeserializeOwned>(
        &self,
        kind: ProviderKind,
        params: &AnalysisConfig,
        payload: &str,
    ) -> Result<T, AnalysisError> {
        let raw = self.request(kind, params, payload, true).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Free-text path: same call without the JSON response constraint.
    pub async fn complete_text(
        &self,
        kind: ProviderKind,
        params: &AnalysisConfig,
        payload: &str,
    ) -> Result<String, AnalysisError> {
        let raw = self.request(kind, params, payload, false).await?;
        Ok(raw.trim().to_string())
    }

    async fn request(
        &self,
        kind: ProviderKind,
        params: &AnalysisConfig,
        payload: &str,
        json_object: bool,
    ) -> Result<String, AnalysisError> {
        if !params.prompt_template.contains(TEXT_PLACEHOLDER) {
            return Err(AnalysisError::Template);
        }
        let prompt = params.prompt_template.replace(TEXT_PLACEHOLDER, payload);
        let model = match kind {
            ProviderKind::OpenAi => params.openai_model.clone(),
            ProviderKind::Groq => params.groq_model.clone(),
        };

        let provider = self.provider(kind);
        tracing::debug!(
            target: "fairway::llm",
            provider = provider.name(),
            model = %model,
            "dispatching chat completion"
        );

        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: params.system_message.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
            response_format: json_object.then_some(ResponseFormat {
                format: "json_object",
            }),
        };

        provider.chat(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;

    fn keyless_client() -> StructuredClient {
        StructuredClient::new(&ProviderCredentials::default())
    }

    #[tokio::test]
    async fn template_without_placeholder_is_rejected_before_any_call() {
        let mut params = CoreConfig::default().sentiment;
        params.prompt_template = "no substitution point here".to_string();
        let err = keyless_client()
            .complete_text(ProviderKind::Groq, &params, "payload")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Template));
    }

    #[tokio::test]
    async fn missing_credentials_surface_before_the_network() {
        let params = CoreConfig::default().sentiment;
        let err = keyless_client()
            .complete_text(ProviderKind::OpenAi, &params, "payload")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::MissingCredentials("OPENAI_API_KEY")
        ));

        let err = keyless_client()
            .complete_text(ProviderKind::Groq, &params, "payload")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::MissingCredentials("GROQ_API_KEY")
        ));
    }
}
