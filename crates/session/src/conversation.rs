//! One ongoing exchange with the generation backend.

use llm_client::{LlmClient, LlmError, SessionHandle};
use prompt::{ChatMessage, PersonaDefinition};
use std::sync::Arc;
use tracing::debug;

/// A backend conversation bound to one persona for its whole lifetime.
///
/// History holds committed user/assistant pairs only: a turn is appended after the backend
/// answered, so a failed or abandoned turn leaves history exactly as it was.
pub struct ConversationSession {
    persona: String,
    handle: SessionHandle,
    history: Vec<ChatMessage>,
    /// Max user/assistant pairs kept; 0 keeps everything.
    max_turns: usize,
    backend: Arc<dyn LlmClient>,
}

impl ConversationSession {
    /// Asks the backend for a session whose system instruction is the persona's prompt.
    pub async fn start(
        backend: Arc<dyn LlmClient>,
        persona: &PersonaDefinition,
        max_turns: usize,
    ) -> Result<Self, LlmError> {
        let handle = backend.start_session(&persona.prompt).await?;
        Ok(Self {
            persona: persona.id.clone(),
            handle,
            history: Vec::new(),
            max_turns,
            backend,
        })
    }

    /// Sends one user turn; on success commits the turn and the reply to history.
    pub async fn send_turn(&mut self, text: &str) -> Result<String, LlmError> {
        let reply = self
            .backend
            .send_turn(&self.handle, &self.history, text)
            .await?;
        self.history.push(ChatMessage::user(text));
        self.history.push(ChatMessage::assistant(reply.clone()));
        self.enforce_retention();
        Ok(reply)
    }

    fn enforce_retention(&mut self) {
        if self.max_turns == 0 {
            return;
        }
        let keep = self.max_turns * 2;
        if self.history.len() > keep {
            let excess = self.history.len() - keep;
            self.history.drain(..excess);
            debug!(persona = %self.persona, dropped = excess, "history trimmed");
        }
    }

    /// Releases the backend session. History is discarded with `self`.
    pub async fn close(self) {
        self.backend.close_session(&self.handle).await;
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn system_prompt(&self) -> &str {
        self.handle.system_prompt()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
