//! # chat-router
//!
//! Decides, once per inbound message, what the bot does with it:
//!
//! 1. messages from bots are ignored;
//! 2. a mention of the bot lists personas, switches persona, starts a chat turn, or asks for input;
//! 3. `!`/`/` commands (`chat`, `persona`, `autochat`, `reset`, `ping`, `help`) run their handler
//!    and nothing else, so auto-chat never answers a command a second time;
//! 4. in auto-chat channels any other text is a chat turn.
//!
//! [`MessageRouter`] implements `relay_core::Handler` and plugs into a `HandlerChain`.

pub mod classify;
pub mod command;
pub mod replies;
mod router;

pub use classify::{classify, Classification, MentionIntent};
pub use command::{parse_command, Command, CommandError, ParsedCommand};
pub use router::MessageRouter;
