//! Recording mock of [`llm_client::LlmClient`] for session and router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use llm_client::{LlmClient, LlmError, SessionHandle};
use prompt::ChatMessage;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// One call to `send_turn`: the system prompt of the session, history passed, and user text.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub system_prompt: String,
    pub history: Vec<ChatMessage>,
    pub text: String,
}

/// What the next `send_turn` call should do.
pub enum TurnBehavior {
    Fail(LlmError),
    /// Never returns; used to abandon a task mid-turn.
    Hang,
    /// Waits on the barrier before answering.
    Rendezvous(Arc<Barrier>),
    Delay(Duration),
}

#[derive(Default)]
pub struct MockLlmClient {
    pub started: Mutex<Vec<String>>,
    pub turns: Mutex<Vec<TurnRecord>>,
    pub closed: AtomicUsize,
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
        self.turns
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Deterministic reply text for `text`.
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
        session: &SessionHandle,
        history: &[ChatMessage],
        text: &str,
    ) -> Result<String, LlmError> {
        self.turns.lock().unwrap().push(TurnRecord {
            system_prompt: session.system_prompt().to_string(),
            history: history.to_vec(),
            text: text.to_string(),
        });
        let behavior = self.turn_behaviors.lock().unwrap().pop_front();
        match behavior {
            Some(TurnBehavior::Fail(err)) => return Err(err),
            Some(TurnBehavior::Hang) => std::future::pending::<()>().await,
            Some(TurnBehavior::Rendezvous(barrier)) => {
                barrier.wait().await;
            }
            Some(TurnBehavior::Delay(d)) => tokio::time::sleep(d).await,
            None => {}
        }
        Ok(reply_for(text))
    }

    async fn close_session(&self, _session: &SessionHandle) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
