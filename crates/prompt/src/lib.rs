//! # Prompt
//!
//! Chat message types shared with the LLM client, and the persona registry: the fixed set of
//! system prompts a channel can select from.
//!
//! ## External interactions
//!
//! - **AI models**: persona prompts are sent as the system instruction of each conversation.

mod message;
mod persona;

pub use message::{ChatMessage, MessageRole};
pub use persona::{PersonaDefinition, PersonaRegistry, DEFAULT_PERSONA};
