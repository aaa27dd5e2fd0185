#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;

pub use mock_bot::{MockBot, SentRecord};
pub use mock_llm::{reply_for, MockLlmClient, TurnBehavior};

use chrono::{DateTime, Utc};
use relay_core::mention::extract_mentions;
use relay_core::{Chat, Message, User};

pub const BOT_USERNAME: &str = "relay_bot";

/// A human message in `chat_id`, with mentions scanned from the text like the Telegram adapter does.
pub fn human_message(chat_id: i64, text: &str) -> Message {
    message_at(chat_id, text, Utc::now())
}

pub fn message_at(chat_id: i64, text: &str, created_at: DateTime<Utc>) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 7,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
            is_bot: false,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "group".to_string(),
        },
        content: text.to_string(),
        mentions: extract_mentions(text),
        created_at,
        reply_to_message_id: None,
    }
}
