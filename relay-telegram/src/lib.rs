//! # relay-telegram
//!
//! Telegram host for the persona relay: adapters, [`relay_core::Bot`] implementation, connection
//! config and the REPL runner. Knows nothing about personas or sessions; every message goes to the
//! handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{collect_mentions, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
