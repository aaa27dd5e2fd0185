//! Adapters from teloxide types to relay_core types.

use relay_core::mention::extract_mentions;
use relay_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let content = self.0.text().unwrap_or("").to_string();
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                    is_bot: false,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            mentions: collect_mentions(&content, self.replied_bot_username()),
            content,
            created_at: self.0.date,
            reply_to_message_id: self.0.reply_to_message().map(|m| m.id.to_string()),
        }
    }
}

impl TelegramMessageWrapper<'_> {
    /// Username of the replied-to message's author, when that author is a bot.
    fn replied_bot_username(&self) -> Option<&str> {
        self.0
            .reply_to_message()
            .and_then(|m| m.from.as_ref())
            .filter(|u| u.is_bot)
            .and_then(|u| u.username.as_deref())
    }
}

/// `@name` tokens in `text`, plus the replied-to bot: replying to a bot addresses it.
pub fn collect_mentions(text: &str, replied_bot: Option<&str>) -> Vec<String> {
    let mut mentions = extract_mentions(text);
    if let Some(bot) = replied_bot.map(str::to_lowercase) {
        if !mentions.contains(&bot) {
            mentions.push(bot);
        }
    }
    mentions
}
