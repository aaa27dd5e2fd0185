//! Prefix command grammar: `!name args` or `/name args`, with an optional `@botname` suffix on the
//! name (`/reset@my_bot`) as Telegram clients send it in groups.

use thiserror::Error;

/// Prefixes that start a command.
pub const COMMAND_PREFIXES: [char; 2] = ['!', '/'];

/// A recognized command with its raw (trimmed) argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    Persona(String),
    AutoChat(String),
    Reset,
    Ping,
    Help,
}

/// Outcome of parsing text that carries a command prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Known(Command),
    /// Prefix syntax with a name this bot does not handle, or addressed to another bot.
    Unknown(String),
}

/// Malformed command arguments. Display is the usage text shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
}

pub const USAGE_AUTOCHAT: &str = "Usage: !autochat on or !autochat off";
pub const USAGE_PERSONA: &str = "Usage: !persona <name>";
pub const USAGE_CHAT: &str = "Usage: !chat <message>";

/// Parses `text` as a command. Returns `None` when the text does not use command syntax
/// (no prefix, or the prefix is not followed by a letter, as in `!!` or `/ 1`).
///
/// `bot_username` decides whether a `@name` suffix addresses this bot; without a known username
/// any suffixed command counts as addressed elsewhere.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<ParsedCommand> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix(COMMAND_PREFIXES)?;
    if !body.chars().next().is_some_and(|c| c.is_alphabetic()) {
        return None;
    }

    let (head, args) = match body.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (body, ""),
    };
    let name = match head.split_once('@') {
        Some((name, target)) => {
            let ours = bot_username.is_some_and(|me| me.eq_ignore_ascii_case(target));
            if !ours {
                return Some(ParsedCommand::Unknown(head.to_string()));
            }
            name
        }
        None => head,
    };

    let command = match name.to_lowercase().as_str() {
        "chat" => Command::Chat(args.to_string()),
        "persona" => Command::Persona(first_word(args).to_string()),
        "autochat" => Command::AutoChat(first_word(args).to_string()),
        "reset" => Command::Reset,
        "ping" => Command::Ping,
        "help" | "start" => Command::Help,
        _ => return Some(ParsedCommand::Unknown(head.to_string())),
    };
    Some(ParsedCommand::Known(command))
}

/// Single-word arguments take the first word; anything after it is ignored.
fn first_word(args: &str) -> &str {
    args.split_whitespace().next().unwrap_or("")
}

/// `on`/`off` (any case) → flag; anything else is a usage error.
pub fn parse_toggle(arg: &str) -> Result<bool, CommandError> {
    match arg.trim().to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(CommandError::Usage(USAGE_AUTOCHAT)),
    }
}

/// Returns the trimmed argument, or the usage error when it is empty.
pub fn require_arg<'a>(arg: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(arg)
    }
}
