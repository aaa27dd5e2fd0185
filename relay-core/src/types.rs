//! Core types: user, chat, message, bot identity, handler response, and the Handler/Middleware traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel key: the unit of conversation state isolation (a Telegram chat id).
pub type ChannelId = i64;

/// User identity (id, username, names, bot flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Messages authored by bots (including this one) are never routed.
    pub is_bot: bool,
}

/// Chat (group, channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChannelId,
    pub chat_type: String,
}

/// A single inbound text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// Lowercased usernames (without `@`) the message addresses. The host adapter also adds the
    /// author of the replied-to message when that author is a bot.
    pub mentions: Vec<String>,
    /// Platform timestamp of the message.
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
}

/// The bot's own identity, used for self-mention detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    pub username: String,
}

impl BotIdentity {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    /// True if `message` lists this bot among its mentions (case-insensitive).
    pub fn is_mentioned_in(&self, message: &Message) -> bool {
        message
            .mentions
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&self.username))
    }
}

/// Handler result for the chain. `Reply(text)` carries the text that was delivered so later
/// middleware can log it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; the reply text was sent to the chat.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Processes a message. The chain calls handlers in order until one returns Stop or Reply.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
}

/// Runs around the handlers: `before` in order (false stops the chain), `after` in reverse.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
