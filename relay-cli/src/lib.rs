//! # relay-cli
//!
//! The `persona-relay` binary's library half: argument parsing, config loading, and assembly of
//! the bot from the workspace crates.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, build_session_store, format_personas, run_bot};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
