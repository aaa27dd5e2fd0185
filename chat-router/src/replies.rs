//! User-facing reply texts.

use prompt::PersonaRegistry;

pub const PROMPT_FOR_INPUT: &str = "Yes? How can I help you?";
pub const CHAT_FAILED: &str = "Oops! Something went wrong with my AI brain.";
pub const NOT_CONFIGURED: &str = "AI is not configured properly (missing API key?).";
pub const AUTOCHAT_ON: &str =
    "🤖 Auto-chat ENABLED for this channel! I will reply to every message. (Type !autochat off to stop)";
pub const AUTOCHAT_OFF: &str = "💤 Auto-chat DISABLED. I will only reply when mentioned.";
pub const RESET_DONE: &str = "Conversation history reset.";

/// Lowercased phrases that, inside a mention, ask for the persona list.
pub const SWITCH_TRIGGERS: [&str; 3] = ["switch persona", "change persona", "切换角色"];

pub fn persona_list(registry: &PersonaRegistry, bot_username: &str) -> String {
    format!(
        "Available personas: {}\nType @{} <persona> to switch!",
        registry.list_options().join(", "),
        bot_username
    )
}

pub fn persona_switched(id: &str) -> String {
    format!("Switched persona to: {id}")
}

pub fn invalid_persona(options: &[String]) -> String {
    format!("Invalid persona. Options: {}", options.join(", "))
}

pub fn pong(latency_ms: i64) -> String {
    format!("Pong! 🏓 ({latency_ms}ms)")
}

pub fn help(bot_username: &str) -> String {
    format!(
        "Commands:\n\
         !chat <message> - talk to the current persona\n\
         !persona <name> - switch persona (resets the conversation)\n\
         !autochat on|off - reply to every message in this chat\n\
         !reset - forget the conversation so far\n\
         !ping - check latency\n\
         Or mention me: @{bot_username} <message>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_list_enumerates_ids_then_aliases() {
        let text = persona_list(&PersonaRegistry::builtin(), "relay_bot");
        assert_eq!(
            text,
            "Available personas: kim_jong_un, putin, trump, catgirl, code_teacher, \
             emotional_assistant, fool, doctor, meow\nType @relay_bot <persona> to switch!"
        );
    }

    #[test]
    fn formatted_replies() {
        assert_eq!(persona_switched("trump"), "Switched persona to: trump");
        assert_eq!(
            invalid_persona(&["a".to_string(), "b".to_string()]),
            "Invalid persona. Options: a, b"
        );
        assert_eq!(pong(42), "Pong! 🏓 (42ms)");
    }
}
