//! # relay-core
//!
//! Core types and traits for the persona relay bot: [`Bot`], [`Handler`], [`Middleware`],
//! message/user/chat types, mention scanning, and tracing initialization. Transport-agnostic;
//! used by handler-chain, chat-router and relay-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod mention;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    BotIdentity, Chat, ChannelId, Handler, HandlerResponse, Message, Middleware, ToCoreMessage,
    ToCoreUser, User,
};
