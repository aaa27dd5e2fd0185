//! Channel state table.
//!
//! Entries are created on first reference and live for the process lifetime (no eviction; an
//! idle/LRU policy would hook into [`SessionStore::channel_count`]'s table). Each entry sits behind
//! its own async mutex; the table lock is only held to find or insert an entry.

use llm_client::LlmClient;
use prompt::{PersonaRegistry, DEFAULT_PERSONA};
use relay_core::ChannelId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::{info, instrument};

use super::conversation::ConversationSession;
use super::error::SessionError;

/// State of one channel.
#[derive(Default)]
pub struct ChannelState {
    /// `None` until the channel selects a persona.
    selected_persona: Option<String>,
    /// Present only when created under the currently selected persona.
    session: Option<ConversationSession>,
    auto_chat: bool,
}

impl ChannelState {
    /// The selected persona, or [`DEFAULT_PERSONA`] if the channel never chose one.
    pub fn persona_or_default(&self) -> &str {
        self.selected_persona.as_deref().unwrap_or(DEFAULT_PERSONA)
    }

    pub fn session(&self) -> Option<&ConversationSession> {
        self.session.as_ref()
    }

    pub fn is_auto_chat_enabled(&self) -> bool {
        self.auto_chat
    }
}

/// Owner of every [`ChannelState`], keyed by channel id.
pub struct SessionStore {
    registry: Arc<PersonaRegistry>,
    backend: Arc<dyn LlmClient>,
    max_history_turns: usize,
    channels: RwLock<HashMap<ChannelId, Arc<Mutex<ChannelState>>>>,
}

impl SessionStore {
    pub fn new(registry: Arc<PersonaRegistry>, backend: Arc<dyn LlmClient>) -> Self {
        Self {
            registry,
            backend,
            max_history_turns: 0,
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Caps the user/assistant pairs each session keeps; 0 keeps everything.
    pub fn with_max_history_turns(mut self, turns: usize) -> Self {
        self.max_history_turns = turns;
        self
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// Number of channels referenced so far.
    pub async fn channel_count(&self) -> usize {
        self.channels.read().await.len()
    }

    async fn entry(&self, channel_id: ChannelId) -> Arc<Mutex<ChannelState>> {
        if let Some(entry) = self.channels.read().await.get(&channel_id) {
            return entry.clone();
        }
        self.channels
            .write()
            .await
            .entry(channel_id)
            .or_default()
            .clone()
    }

    /// Locks one channel. Everything done through the guard is serialized with other holders
    /// of the same channel; other channels are unaffected.
    pub async fn lock(&self, channel_id: ChannelId) -> ChannelGuard<'_> {
        let state = self.entry(channel_id).await.lock_owned().await;
        ChannelGuard {
            store: self,
            channel_id,
            state,
        }
    }

    /// Runs one chat turn on the channel's session, creating the session if needed.
    pub async fn send_turn(&self, channel_id: ChannelId, text: &str) -> Result<String, SessionError> {
        self.lock(channel_id).await.send_turn(text).await
    }

    /// Selects a persona by identifier or alias and drops the channel's session.
    /// Returns the canonical identifier.
    pub async fn set_persona(&self, channel_id: ChannelId, name: &str) -> Result<String, SessionError> {
        self.lock(channel_id).await.set_persona(name).await
    }

    /// Drops the channel's session, keeping the persona. No-op if there is none.
    pub async fn reset_session(&self, channel_id: ChannelId) {
        self.lock(channel_id).await.reset_session().await
    }

    pub async fn set_auto_chat(&self, channel_id: ChannelId, enabled: bool) {
        self.lock(channel_id).await.set_auto_chat(enabled)
    }

    pub async fn is_auto_chat_enabled(&self, channel_id: ChannelId) -> bool {
        self.lock(channel_id).await.is_auto_chat_enabled()
    }

    /// The channel's persona, defaulting to [`DEFAULT_PERSONA`].
    pub async fn persona(&self, channel_id: ChannelId) -> String {
        self.lock(channel_id).await.persona().to_string()
    }
}

fn option_strings(registry: &PersonaRegistry) -> Vec<String> {
    registry.list_options().into_iter().map(str::to_string).collect()
}

/// Exclusive access to one channel's state for the duration of an event.
pub struct ChannelGuard<'a> {
    store: &'a SessionStore,
    channel_id: ChannelId,
    state: OwnedMutexGuard<ChannelState>,
}

impl ChannelGuard<'_> {
    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub fn state(&self) -> &ChannelState {
        &self.state
    }

    pub fn persona(&self) -> &str {
        self.state.persona_or_default()
    }

    pub fn is_auto_chat_enabled(&self) -> bool {
        self.state.auto_chat
    }

    pub fn set_auto_chat(&mut self, enabled: bool) {
        self.state.auto_chat = enabled;
        info!(chat_id = self.channel_id, enabled, "auto-chat updated");
    }

    /// Returns the channel's session, starting one under the current persona if absent.
    /// A failed start caches nothing, so the next call retries.
    #[instrument(skip(self), fields(chat_id = self.channel_id))]
    pub async fn get_or_create_session(&mut self) -> Result<&mut ConversationSession, SessionError> {
        let session = match self.state.session.take() {
            Some(existing) => existing,
            None => {
                let store = self.store;
                let requested = self.state.persona_or_default();
                let persona = store
                    .registry
                    .lookup(requested)
                    .or_else(|| store.registry.lookup(DEFAULT_PERSONA))
                    .ok_or_else(|| SessionError::UnknownPersona {
                        requested: requested.to_string(),
                        options: option_strings(&store.registry),
                    })?;
                let session = ConversationSession::start(
                    store.backend.clone(),
                    persona,
                    store.max_history_turns,
                )
                .await
                .map_err(SessionError::on_create)?;
                info!(chat_id = self.channel_id, persona = %persona.id, "session created");
                session
            }
        };
        Ok(self.state.session.insert(session))
    }

    /// One chat turn: get or create the session, then send `text`.
    pub async fn send_turn(&mut self, text: &str) -> Result<String, SessionError> {
        let session = self.get_or_create_session().await?;
        session.send_turn(text).await.map_err(SessionError::on_turn)
    }

    /// Validates `name` (identifier or alias), selects it and drops any existing session, even
    /// when the persona did not change. On an unknown name nothing changes.
    #[instrument(skip(self), fields(chat_id = self.channel_id))]
    pub async fn set_persona(&mut self, name: &str) -> Result<String, SessionError> {
        let registry = &self.store.registry;
        let id = match registry.lookup(name) {
            Some(persona) => persona.id.clone(),
            None => {
                return Err(SessionError::UnknownPersona {
                    requested: name.to_string(),
                    options: option_strings(registry),
                })
            }
        };
        self.state.selected_persona = Some(id.clone());
        self.invalidate().await;
        info!(chat_id = self.channel_id, persona = %id, "persona selected");
        Ok(id)
    }

    /// Drops the session without touching the persona. Idempotent.
    pub async fn reset_session(&mut self) {
        if self.invalidate().await {
            info!(chat_id = self.channel_id, "session reset");
        }
    }

    /// Closes and drops the current session; returns whether one existed.
    async fn invalidate(&mut self) -> bool {
        match self.state.session.take() {
            Some(session) => {
                session.close().await;
                true
            }
            None => false,
        }
    }
}
