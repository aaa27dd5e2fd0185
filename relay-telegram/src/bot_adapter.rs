//! Wraps teloxide::Bot and implements [`relay_core::Bot`].

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, RelayError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId};

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }
}
