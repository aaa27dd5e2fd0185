//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests record calls.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound side of the host platform: what the router needs to answer a channel.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Shows a "typing..." indicator in the chat while a reply is being generated.
    /// Transports without such a feature keep the default no-op.
    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        Ok(())
    }
}
