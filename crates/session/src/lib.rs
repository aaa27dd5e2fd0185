//! # session
//!
//! Per-channel conversation state for the relay bot.
//!
//! - [`ConversationSession`]: one backend conversation under one persona, owning its turn history.
//! - [`ChannelState`]: selected persona, optional session, auto-chat flag.
//! - [`SessionStore`]: the table of channel states, with one async lock per channel so that turns
//!   and persona switches on the same channel are serialized while other channels proceed.

mod conversation;
mod error;
mod store;

pub use conversation::ConversationSession;
pub use error::SessionError;
pub use store::{ChannelGuard, ChannelState, SessionStore};
