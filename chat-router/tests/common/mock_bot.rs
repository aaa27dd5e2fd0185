//! Mock implementation of [`relay_core::Bot`] that records what would have been sent.

use async_trait::async_trait;
use relay_core::{Bot, Chat, RelayError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    typing: AtomicUsize,
    fail_typing: AtomicBool,
}

impl MockBot {
    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }

    pub fn typing_count(&self) -> usize {
        self.typing.load(Ordering::SeqCst)
    }

    /// Makes every `send_typing` call fail.
    pub fn fail_typing(&self) {
        self.fail_typing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        self.typing.fetch_add(1, Ordering::SeqCst);
        if self.fail_typing.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("chat action rejected".to_string()));
        }
        Ok(())
    }
}
