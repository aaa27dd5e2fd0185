use llm_client::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested persona is neither an identifier nor an alias. No state was changed.
    #[error("unknown persona '{requested}'")]
    UnknownPersona {
        requested: String,
        /// Identifiers followed by aliases, for the user-facing error.
        options: Vec<String>,
    },

    /// No backend credential; every chat attempt fails the same way until restart.
    #[error("generation backend is not configured")]
    BackendUnconfigured,

    /// Starting a backend session failed; nothing was cached.
    #[error("failed to start session: {0}")]
    CreationFailure(#[source] LlmError),

    /// A turn failed; history is unchanged and the turn may be retried.
    #[error("backend turn failed: {0}")]
    BackendFailure(#[source] LlmError),
}

impl SessionError {
    pub(crate) fn on_create(e: LlmError) -> Self {
        match e {
            LlmError::Unconfigured => SessionError::BackendUnconfigured,
            other => SessionError::CreationFailure(other),
        }
    }

    pub(crate) fn on_turn(e: LlmError) -> Self {
        match e {
            LlmError::Unconfigured => SessionError::BackendUnconfigured,
            other => SessionError::BackendFailure(other),
        }
    }
}
