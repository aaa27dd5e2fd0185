use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use relay_core::{Bot, BotIdentity, Chat, Handler, HandlerResponse, Message, Result};
use session::{ChannelGuard, SessionError, SessionStore};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::classify::{classify, Classification, MentionIntent};
use crate::command::{parse_toggle, require_arg, Command, CommandError, USAGE_CHAT, USAGE_PERSONA};
use crate::replies;

/// Routes inbound messages to persona switches, chat turns and commands, and delivers the reply.
///
/// Every routed event holds its channel's lock from classification until the reply is sent, so
/// events on one channel are handled one at a time, in the order their tasks acquire the lock.
pub struct MessageRouter {
    store: Arc<SessionStore>,
    bot: Arc<dyn Bot>,
    /// Filled by the host once it knows who the bot is (`get_me`).
    identity: Arc<RwLock<Option<BotIdentity>>>,
}

impl MessageRouter {
    pub fn new(
        store: Arc<SessionStore>,
        bot: Arc<dyn Bot>,
        identity: Arc<RwLock<Option<BotIdentity>>>,
    ) -> Self {
        Self {
            store,
            bot,
            identity,
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Classifies and handles one message. Returns the reply that was sent, if any.
    ///
    /// Backend and validation failures become replies; only a failed delivery is an error.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    pub async fn route(&self, message: &Message) -> Result<Option<String>> {
        if message.user.is_bot {
            debug!("Ignoring message from bot");
            return Ok(None);
        }

        let me = self.identity.read().await.clone();
        let mut channel = self.store.lock(message.chat.id).await;
        let classification = classify(
            message,
            me.as_ref(),
            self.store.registry(),
            channel.is_auto_chat_enabled(),
        );
        debug!(?classification, "Classified message");

        let reply = self
            .dispatch(&mut channel, message, me.as_ref(), classification)
            .await;
        if let Some(text) = &reply {
            self.bot.send_message(&message.chat, text).await?;
        }
        Ok(reply)
    }

    async fn dispatch(
        &self,
        channel: &mut ChannelGuard<'_>,
        message: &Message,
        me: Option<&BotIdentity>,
        classification: Classification,
    ) -> Option<String> {
        match classification {
            Classification::Ignore => None,
            Classification::Mention(MentionIntent::ListPersonas) => Some(replies::persona_list(
                self.store.registry(),
                bot_username(me),
            )),
            Classification::Mention(MentionIntent::SwitchPersona(id)) => {
                Some(self.switch_persona(channel, &id).await)
            }
            Classification::Mention(MentionIntent::Chat(text))
            | Classification::AutoChat(text) => {
                Some(self.chat_turn(channel, &message.chat, &text).await)
            }
            Classification::Mention(MentionIntent::Empty) => {
                Some(replies::PROMPT_FOR_INPUT.to_string())
            }
            Classification::Command(command) => {
                let reply = match self.run_command(channel, message, me, command).await {
                    Ok(reply) => reply,
                    Err(usage) => {
                        info!(chat_id = channel.channel_id(), "{}", usage);
                        usage.to_string()
                    }
                };
                Some(reply)
            }
            Classification::UnknownCommand(name) => {
                info!(chat_id = channel.channel_id(), command = %name, "Command not found, ignoring");
                None
            }
        }
    }

    async fn run_command(
        &self,
        channel: &mut ChannelGuard<'_>,
        message: &Message,
        me: Option<&BotIdentity>,
        command: Command,
    ) -> std::result::Result<String, CommandError> {
        let reply = match command {
            Command::Chat(arg) => {
                let text = require_arg(&arg, USAGE_CHAT)?;
                self.chat_turn(channel, &message.chat, text).await
            }
            Command::Persona(arg) => {
                let name = require_arg(&arg, USAGE_PERSONA)?;
                self.switch_persona(channel, name).await
            }
            Command::AutoChat(arg) => {
                let enabled = parse_toggle(&arg)?;
                channel.set_auto_chat(enabled);
                if enabled {
                    replies::AUTOCHAT_ON.to_string()
                } else {
                    replies::AUTOCHAT_OFF.to_string()
                }
            }
            Command::Reset => {
                channel.reset_session().await;
                replies::RESET_DONE.to_string()
            }
            Command::Ping => replies::pong(latency_ms(message)),
            Command::Help => replies::help(bot_username(me)),
        };
        Ok(reply)
    }

    async fn switch_persona(&self, channel: &mut ChannelGuard<'_>, name: &str) -> String {
        match channel.set_persona(name).await {
            Ok(id) => replies::persona_switched(&id),
            Err(SessionError::UnknownPersona { requested, options }) => {
                warn!(
                    chat_id = channel.channel_id(),
                    persona = %requested,
                    operation = "set_persona",
                    "Unknown persona requested"
                );
                replies::invalid_persona(&options)
            }
            Err(e) => {
                error!(
                    chat_id = channel.channel_id(),
                    persona = %name,
                    operation = "set_persona",
                    error = %e,
                    "Persona switch failed"
                );
                replies::CHAT_FAILED.to_string()
            }
        }
    }

    async fn chat_turn(&self, channel: &mut ChannelGuard<'_>, chat: &Chat, text: &str) -> String {
        if let Err(e) = self.bot.send_typing(chat).await {
            debug!(chat_id = chat.id, error = %e, "Typing indicator failed");
        }

        match channel.send_turn(text).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    chat_id = channel.channel_id(),
                    persona = %channel.persona(),
                    operation = failed_operation(&e),
                    error = %e,
                    "Chat turn failed"
                );
                match e {
                    SessionError::BackendUnconfigured => replies::NOT_CONFIGURED.to_string(),
                    _ => replies::CHAT_FAILED.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl Handler for MessageRouter {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        Ok(match self.route(message).await? {
            Some(text) => HandlerResponse::Reply(text),
            None => HandlerResponse::Continue,
        })
    }
}

fn bot_username(me: Option<&BotIdentity>) -> &str {
    me.map_or("bot", |me| me.username.as_str())
}

fn failed_operation(e: &SessionError) -> &'static str {
    match e {
        SessionError::UnknownPersona { .. } => "set_persona",
        SessionError::BackendUnconfigured | SessionError::CreationFailure(_) => "start_session",
        SessionError::BackendFailure(_) => "send_turn",
    }
}

/// Milliseconds between the platform timestamp and now; clock skew never yields a negative value.
fn latency_ms(message: &Message) -> i64 {
    (Utc::now() - message.created_at).num_milliseconds().max(0)
}
