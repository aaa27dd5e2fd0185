//! Startup configuration, read once from the environment.

use anyhow::{anyhow, bail, Context, Result};
use llm_client::{EnvLlmConfig, LlmConfig};
use relay_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/persona-relay.log";

pub struct BotConfig {
    pub bot_token: String,
    /// Optional Telegram Bot API base URL (`TELEGRAM_API_URL` or `TELOXIDE_API_URL`).
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub llm: EnvLlmConfig,
    /// User/assistant pairs kept per session; 0 keeps everything.
    pub max_history_turns: usize,
}

impl BotConfig {
    /// Loads configuration from the environment. `token`, when given, overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram = TelegramConfig::with_token(bot_token);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let max_history_turns = match env::var("MAX_HISTORY_TURNS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MAX_HISTORY_TURNS must be a non-negative integer, got {raw:?}"))?,
            Err(_) => 0,
        };

        Ok(Self {
            bot_token: telegram.bot_token,
            telegram_api_url: telegram.telegram_api_url,
            log_file,
            llm: EnvLlmConfig::from_env(),
            max_history_turns,
        })
    }

    /// Rejects settings that would only fail later, at first use.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("BOT_TOKEN is empty");
        }
        self.telegram().api_url()?;
        reqwest::Url::parse(self.llm.base_url())
            .with_context(|| format!("invalid LLM_BASE_URL: {}", self.llm.base_url()))?;
        if self.llm.timeout().is_zero() {
            bail!("LLM_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
        }
    }
}
