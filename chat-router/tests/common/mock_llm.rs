//! Recording mock of [`llm_client::LlmClient`].

use async_trait::async_trait;
use llm_client::{LlmClient, LlmError, SessionHandle};
use prompt::ChatMessage;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the next `send_turn` call should do.
pub enum TurnBehavior {
    Fail(LlmError),
    Delay(Duration),
}

#[derive(Default)]
pub struct MockLlmClient {
    started: Mutex<Vec<String>>,
    turns: Mutex<Vec<String>>,
    closed: AtomicUsize,
    start_failures: Mutex<VecDeque<LlmError>>,
    turn_behaviors: Mutex<VecDeque<TurnBehavior>>,
}

impl MockLlmClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_next_start(&self, error: LlmError) {
        self.start_failures.lock().unwrap().push_back(error);
    }

    pub fn push_turn(&self, behavior: TurnBehavior) {
        self.turn_behaviors.lock().unwrap().push_back(behavior);
    }

    pub fn started_prompts(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn turn_texts(&self) -> Vec<String> {
        self.turns.lock().unwrap().clone()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

pub fn reply_for(text: &str) -> String {
    format!("reply to: {}", text)
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn start_session(&self, system_prompt: &str) -> Result<SessionHandle, LlmError> {
        if let Some(err) = self.start_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.started.lock().unwrap().push(system_prompt.to_string());
        Ok(SessionHandle::new(system_prompt))
    }

    async fn send_turn(
        &self,
        _session: &SessionHandle,
        _history: &[ChatMessage],
        text: &str,
    ) -> Result<String, LlmError> {
        self.turns.lock().unwrap().push(text.to_string());
        let behavior = self.turn_behaviors.lock().unwrap().pop_front();
        match behavior {
            Some(TurnBehavior::Fail(err)) => return Err(err),
            Some(TurnBehavior::Delay(d)) => tokio::time::sleep(d).await,
            None => {}
        }
        Ok(reply_for(text))
    }

    async fn close_session(&self, _session: &SessionHandle) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
