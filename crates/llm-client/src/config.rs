//! LLM configuration: trait and env-based implementation.

use std::env;
use std::time::Duration;

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration of the generation backend.
pub trait LlmConfig: Send + Sync {
    /// `None` when no credential is configured.
    fn api_key(&self) -> Option<&str>;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// LLM config loaded from environment variables.
#[derive(Clone)]
pub struct EnvLlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for EnvLlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvLlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EnvLlmConfig {
    /// Loads from `GOOGLE_API_KEY` (or `LLM_API_KEY`), `LLM_BASE_URL`, `MODEL`, `LLM_TIMEOUT_SECS`.
    /// A missing or blank key is not an error: `api_key` is `None`.
    pub fn from_env() -> Self {
        let api_key = env::var("GOOGLE_API_KEY")
            .or_else(|_| env::var("LLM_API_KEY"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("MODEL")
            .unwrap_or_else(|_| super::openai_llm::DEFAULT_MODEL.to_string());
        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }
}
