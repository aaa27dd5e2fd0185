//! Component assembly: persona registry, backend, session store, router and handler chain.

use anyhow::Result;
use chat_router::MessageRouter;
use handler_chain::{HandlerChain, LoggingMiddleware};
use llm_client::LlmConfig;
use openai_client::mask_token;
use prompt::PersonaRegistry;
use relay_core::{init_tracing, Bot, BotIdentity};
use relay_telegram::{run_repl, TelegramBotAdapter};
use session::SessionStore;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Session store over the built-in personas and the configured backend.
pub fn build_session_store(config: &BotConfig) -> Arc<SessionStore> {
    let registry = Arc::new(PersonaRegistry::builtin());
    let backend = llm_client::from_config(&config.llm);
    Arc::new(SessionStore::new(registry, backend).with_max_history_turns(config.max_history_turns))
}

/// Logging middleware around the message router.
pub fn build_handler_chain(
    store: Arc<SessionStore>,
    bot: Arc<dyn Bot>,
    identity: Arc<RwLock<Option<BotIdentity>>>,
) -> HandlerChain {
    let router = Arc::new(MessageRouter::new(store, bot, identity));
    HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(router)
}

/// Initializes logging, validates config, wires the components and runs until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;
    config.validate()?;

    info!(
        model = %config.llm.model(),
        base_url = %config.llm.base_url(),
        api_key = %config.llm.api_key().map(mask_token).unwrap_or_else(|| "<none>".to_string()),
        timeout_secs = config.llm.timeout_secs,
        max_history_turns = config.max_history_turns,
        "Starting persona relay"
    );

    let teloxide_bot = config.telegram().build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let identity = Arc::new(RwLock::new(None));
    let store = build_session_store(&config);
    let chain = build_handler_chain(store, bot, identity.clone());

    run_repl(teloxide_bot, chain, identity).await
}

/// One block per persona: identifier, aliases, first line of the prompt.
pub fn format_personas(registry: &PersonaRegistry) -> String {
    let mut out = String::new();
    for persona in registry.iter() {
        let _ = write!(out, "{}", persona.id);
        if !persona.aliases.is_empty() {
            let _ = write!(out, " (aliases: {})", persona.aliases.join(", "));
        }
        let summary = persona.prompt.lines().next().unwrap_or("");
        let _ = writeln!(out, "\n    {summary}");
    }
    out
}
