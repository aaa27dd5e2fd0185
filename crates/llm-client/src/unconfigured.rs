use async_trait::async_trait;
use prompt::ChatMessage;

use super::{LlmClient, LlmError, SessionHandle};

/// Stand-in backend used when no API key is configured: every operation fails with
/// [`LlmError::Unconfigured`] and nothing is ever cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredLlmClient;

#[async_trait]
impl LlmClient for UnconfiguredLlmClient {
    async fn start_session(&self, _system_prompt: &str) -> Result<SessionHandle, LlmError> {
        Err(LlmError::Unconfigured)
    }

    async fn send_turn(
        &self,
        _session: &SessionHandle,
        _history: &[ChatMessage],
        _text: &str,
    ) -> Result<String, LlmError> {
        Err(LlmError::Unconfigured)
    }
}
