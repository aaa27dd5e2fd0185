//! [`LlmClient`] over an OpenAI-compatible chat completions endpoint.
//!
//! The endpoint is stateless: a session is just the handle carrying the system prompt, and every
//! turn resends system prompt + history + the new user text.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CompletionError, OpenAIClient,
};
use prompt::{ChatMessage, MessageRole};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{LlmClient, LlmError, SessionHandle};

/// Default model: the lightweight Gemini model, served through Gemini's OpenAI-compatible API.
pub const DEFAULT_MODEL: &str = "gemini-flash-lite-latest";

#[derive(Clone)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: OpenAIClient::new(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Converts one [`ChatMessage`] into the API message format.
fn to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, LlmError> {
    let content = msg.content.clone();
    let built: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?
            .into(),
    };
    Ok(built)
}

impl From<CompletionError> for LlmError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Timeout(d) => LlmError::Timeout(d),
            CompletionError::EmptyResponse => LlmError::EmptyResponse,
            CompletionError::Api(e) => LlmError::Request(e.to_string()),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    async fn start_session(&self, system_prompt: &str) -> Result<SessionHandle, LlmError> {
        let session = SessionHandle::new(system_prompt);
        debug!(session_id = %session.id(), model = %self.model, "session started");
        Ok(session)
    }

    #[instrument(skip(self, session, history, text), fields(session_id = %session.id(), history_len = history.len()))]
    async fn send_turn(
        &self,
        session: &SessionHandle,
        history: &[ChatMessage],
        text: &str,
    ) -> Result<String, LlmError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(to_openai(&ChatMessage::system(session.system_prompt()))?);
        for msg in history {
            messages.push(to_openai(msg)?);
        }
        messages.push(to_openai(&ChatMessage::user(text))?);

        let reply = self.client.chat_completion(&self.model, messages).await?;
        if reply.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(reply)
    }

    async fn close_session(&self, session: &SessionHandle) {
        debug!(session_id = %session.id(), "session released");
    }
}
