//! OpenAI-compatible chat-completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::error;

use super::prompts;
use super::LanguageModel;
use crate::config::AppConfig;
use crate::config::LLM_KEY_ENV;
use crate::errors::ProfileTwinError;
use crate::errors::Result;

/// Max tokens requested by the health check
const HEALTH_CHECK_MAX_TOKENS: u32 = 10;

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Chat-completions service with a fixed model, token budget and persona
#[derive(Clone)]
pub struct LlmService {
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system_prompt: String,
    client: Client,
}

impl LlmService {
    /// Create a new LLM service from configuration
    ///
    /// # Errors
    /// - `ConfigError` when the API key is empty or the endpoint does not parse
    /// - HTTP client build errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        if config.llm_key().trim().is_empty() {
            return Err(ProfileTwinError::ConfigError(format!(
                "Missing {LLM_KEY_ENV} in environment variables"
            )));
        }

        let endpoint = config.llm_endpoint();
        url::Url::parse(endpoint).map_err(|e| {
            ProfileTwinError::ConfigError(format!("Invalid LLM endpoint '{endpoint}': {e}"))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm.timeout_secs))
            .build()
            .map_err(|e| ProfileTwinError::HttpError(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: config.llm_key().to_string(),
            model: config.llm_model().to_string(),
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
            system_prompt: prompts::system_prompt(config.owner_name()),
            client,
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a chat completion and return the first choice's text
    ///
    /// # Errors
    /// - Network errors (timeouts, connection failures)
    /// - Non-success HTTP status from the API
    /// - Malformed responses, or a response with no text
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: Option<f32>,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint);
        let request = ChatRequest {
            model: &self.model,
            messages,
            max_tokens,
            temperature,
        };

        debug!("Sending chat completion to {} (model={})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProfileTwinError::LlmError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProfileTwinError::LlmError(format!(
                "API error ({status}): {message}"
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProfileTwinError::LlmError(format!("Malformed response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProfileTwinError::LlmError("No text response from LLM".to_string()))
    }
}

#[async_trait]
impl LanguageModel for LlmService {
    async fn generate(&self, context: &str, question: &str) -> Result<String> {
        let messages = [
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(prompts::user_prompt(context, question)),
        ];

        self.chat(&messages, self.max_tokens, Some(self.temperature))
            .await
            .map_err(|e| {
                error!("LLM generation error: {}", e);
                e
            })
    }

    async fn health_check(&self) -> bool {
        let messages = [ChatMessage::user("Hi")];
        match self.chat(&messages, HEALTH_CHECK_MAX_TOKENS, None).await {
            Ok(_) => true,
            Err(e) => {
                error!("LLM health check failed: {}", e);
                false
            }
        }
    }
}
