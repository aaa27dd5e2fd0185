//! # OpenAI-compatible API client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion against any
//! OpenAI-compatible endpoint (OpenAI itself, Gemini's OpenAI surface, local proxies).
//! Provides token masking for safe logging and a bounded request time.

use async_openai::{error::OpenAIError, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default upper bound for one completion request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

/// Failure of a single completion request.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {0}")]
    Api(#[from] OpenAIError),

    #[error("response contained no choices")]
    EmptyResponse,
}

/// OpenAI-compatible chat client. Cheap to clone; clones share the HTTP client.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// Masked form of the API key; the raw key is never kept for logging.
    masked_key: String,
    timeout: Duration,
}

impl OpenAIClient {
    /// Builds a client for the given endpoint. `base_url` is the API root (e.g. `https://api.openai.com/v1`).
    pub fn new(api_key: String, base_url: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/').to_string());
        Self {
            client: Arc::new(Client::with_config(config)),
            masked_key,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// Logs model, message count, masked key, and token usage; message contents are logged at debug.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, CompletionError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_key,
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(json) = serde_json::to_string(&request) {
                tracing::debug!(request_json = %json, "chat_completion request JSON");
            }
        }

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| CompletionError::Timeout(self.timeout))??;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
