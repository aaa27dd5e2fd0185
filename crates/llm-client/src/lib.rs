//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (the generation backend seam), the [`SessionHandle`] it hands
//! out, and its implementations: [`OpenAILlmClient`] for OpenAI-compatible endpoints and
//! [`UnconfiguredLlmClient`] for when no credential is present.
//!
//! The trait is object-safe so the rest of the bot holds an `Arc<dyn LlmClient>`.

use async_trait::async_trait;
use prompt::ChatMessage;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

mod config;
mod openai_llm;
mod unconfigured;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::OpenAILlmClient;
pub use unconfigured::UnconfiguredLlmClient;

/// Backend failure taxonomy.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API credential was configured at startup.
    #[error("generation backend is not configured (missing API key)")]
    Unconfigured,

    #[error("backend request timed out after {0:?}")]
    Timeout(Duration),

    /// Network, HTTP or API-level error, with detail for server-side logs.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered without any usable text.
    #[error("backend returned an empty response")]
    EmptyResponse,
}

/// One backend conversation, bound to a single system prompt for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    id: Uuid,
    system_prompt: Arc<str>,
}

impl SessionHandle {
    pub fn new(system_prompt: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            system_prompt: Arc::from(system_prompt),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

/// Generation backend: opens sessions under a system prompt and answers turns.
///
/// `send_turn` receives the prior turns of the session; implementations must not retain them, the
/// caller owns history and only commits a turn after a successful reply.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Starts a session whose every turn is answered under `system_prompt`.
    async fn start_session(&self, system_prompt: &str) -> Result<SessionHandle, LlmError>;

    /// Sends one user turn and returns the reply text.
    async fn send_turn(
        &self,
        session: &SessionHandle,
        history: &[ChatMessage],
        text: &str,
    ) -> Result<String, LlmError>;

    /// Releases backend resources held for `session`. Stateless backends keep the default no-op.
    async fn close_session(&self, _session: &SessionHandle) {}
}

/// Builds the backend from config: [`OpenAILlmClient`] when an API key is present, otherwise an
/// [`UnconfiguredLlmClient`] so the bot still starts and every chat attempt fails cleanly.
pub fn from_config(config: &dyn LlmConfig) -> Arc<dyn LlmClient> {
    match config.api_key() {
        Some(key) => Arc::new(
            OpenAILlmClient::new(key.to_string(), config.base_url().to_string())
                .with_model(config.model().to_string())
                .with_timeout(config.timeout()),
        ),
        None => {
            warn!("No LLM API key found in environment (GOOGLE_API_KEY / LLM_API_KEY). AI chat will not work.");
            Arc::new(UnconfiguredLlmClient)
        }
    }
}
