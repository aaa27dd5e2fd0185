//! Single-pass classification of an inbound message into one handling path.
//!
//! Priority: bot author → mention → command → auto-chat → nothing. The first match wins; the
//! router dispatches on the result without re-inspecting the message.

use prompt::PersonaRegistry;
use relay_core::mention::strip_mention;
use relay_core::{BotIdentity, Message};

use crate::command::{parse_command, Command, ParsedCommand};
use crate::replies::SWITCH_TRIGGERS;

/// What the bot was asked to do when it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionIntent {
    ListPersonas,
    /// Canonical persona id; the whole mention text named it.
    SwitchPersona(String),
    Chat(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Authored by a bot, or no rule applies.
    Ignore,
    Mention(MentionIntent),
    Command(Command),
    /// Command syntax with a name we do not handle (or addressed to another bot).
    UnknownCommand(String),
    /// Raw text of an ambient message in an auto-chat channel.
    AutoChat(String),
}

/// Classifies `message`. `me` is `None` until the host has learned the bot's own identity;
/// in that window nothing counts as a mention.
pub fn classify(
    message: &Message,
    me: Option<&BotIdentity>,
    registry: &PersonaRegistry,
    auto_chat: bool,
) -> Classification {
    if message.user.is_bot {
        return Classification::Ignore;
    }

    if let Some(me) = me.filter(|me| me.is_mentioned_in(message)) {
        let content = strip_mention(&message.content, &me.username);
        return Classification::Mention(mention_intent(&content, registry));
    }

    match parse_command(&message.content, me.map(|me| me.username.as_str())) {
        Some(ParsedCommand::Known(command)) => return Classification::Command(command),
        Some(ParsedCommand::Unknown(name)) => return Classification::UnknownCommand(name),
        None => {}
    }

    if auto_chat && !message.content.trim().is_empty() {
        return Classification::AutoChat(message.content.clone());
    }
    Classification::Ignore
}

fn mention_intent(content: &str, registry: &PersonaRegistry) -> MentionIntent {
    let lowered = content.to_lowercase();
    if SWITCH_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        return MentionIntent::ListPersonas;
    }
    if let Some(persona) = registry.lookup(content) {
        return MentionIntent::SwitchPersona(persona.id.clone());
    }
    if content.is_empty() {
        MentionIntent::Empty
    } else {
        MentionIntent::Chat(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use relay_core::mention::extract_mentions;
    use relay_core::{Chat, User};

    fn message(text: &str, is_bot: bool) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: Some("alice".to_string()),
                first_name: None,
                last_name: None,
                is_bot,
            },
            chat: Chat {
                id: -100,
                chat_type: "group".to_string(),
            },
            content: text.to_string(),
            mentions: extract_mentions(text),
            created_at: Utc::now(),
            reply_to_message_id: None,
        }
    }

    fn run(text: &str, auto_chat: bool) -> Classification {
        let me = BotIdentity::new(1, "Relay_Bot");
        classify(
            &message(text, false),
            Some(&me),
            &PersonaRegistry::builtin(),
            auto_chat,
        )
    }

    #[test]
    fn bot_authors_are_ignored_even_when_mentioning() {
        let me = BotIdentity::new(1, "relay_bot");
        let registry = PersonaRegistry::builtin();
        let msg = message("@relay_bot hello", true);
        assert_eq!(
            classify(&msg, Some(&me), &registry, true),
            Classification::Ignore
        );
    }

    #[test]
    fn mention_intents() {
        assert_eq!(
            run("@relay_bot Switch Persona please", false),
            Classification::Mention(MentionIntent::ListPersonas)
        );
        assert_eq!(
            run("@relay_bot 切换角色", false),
            Classification::Mention(MentionIntent::ListPersonas)
        );
        assert_eq!(
            run("@relay_bot  MEOW ", false),
            Classification::Mention(MentionIntent::SwitchPersona("catgirl".to_string()))
        );
        assert_eq!(
            run("@Relay_Bot trump tell me about tariffs", false),
            Classification::Mention(MentionIntent::Chat("trump tell me about tariffs".to_string()))
        );
        assert_eq!(
            run("@relay_bot", false),
            Classification::Mention(MentionIntent::Empty)
        );
    }

    #[test]
    fn mention_wins_over_command_syntax() {
        assert_eq!(
            run("@relay_bot !reset", true),
            Classification::Mention(MentionIntent::Chat("!reset".to_string()))
        );
    }

    #[test]
    fn commands_are_never_auto_chatted() {
        assert_eq!(run("!reset", true), Classification::Command(Command::Reset));
        assert_eq!(
            run("/reset@relay_bot", true),
            Classification::Command(Command::Reset)
        );
        assert_eq!(
            run("!dance", true),
            Classification::UnknownCommand("dance".to_string())
        );
        assert_eq!(
            run("/reset@other_bot", true),
            Classification::UnknownCommand("reset@other_bot".to_string())
        );
    }

    #[test]
    fn ambient_text_depends_on_auto_chat() {
        assert_eq!(
            run("nice weather", true),
            Classification::AutoChat("nice weather".to_string())
        );
        assert_eq!(run("nice weather", false), Classification::Ignore);
        assert_eq!(run("   ", true), Classification::Ignore);
    }

    #[test]
    fn unknown_identity_disables_mentions() {
        let registry = PersonaRegistry::builtin();
        let msg = message("@relay_bot hello", false);
        assert_eq!(classify(&msg, None, &registry, false), Classification::Ignore);
    }
}
