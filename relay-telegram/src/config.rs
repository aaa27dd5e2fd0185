//! Telegram connection settings: token and optional Bot API base URL.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub struct TelegramConfig {
    pub bot_token: String,
    /// Alternate Bot API server (local `telegram-bot-api`, proxies).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Uses `bot_token`; the API URL comes from TELEGRAM_API_URL (or TELOXIDE_API_URL).
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: api_url_from_env(),
        }
    }

    /// The parsed API URL, if one is configured.
    pub fn api_url(&self) -> Result<Option<Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|url| Url::parse(url).with_context(|| format!("invalid Telegram API URL: {url}")))
            .transpose()
    }

    /// Creates the teloxide bot, pointing it at the alternate API server when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}

fn api_url_from_env() -> Option<String> {
    env::var("TELEGRAM_API_URL")
        .or_else(|_| env::var("TELOXIDE_API_URL"))
        .ok()
        .filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
    }

    #[test]
    #[serial]
    fn test_with_token() {
        clear_env();
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.api_url().unwrap().is_none());
    }

    #[test]
    #[serial]
    fn api_url_falls_back_to_teloxide_variable() {
        clear_env();
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
        let config = TelegramConfig::with_token("123:abc".to_string());
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        assert_eq!(
            config.api_url().unwrap().map(|u| u.to_string()),
            Some("http://localhost:8081/".to_string())
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn bad_api_url_is_rejected() {
        clear_env();
        let mut config = TelegramConfig::with_token("123:abc".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.api_url().is_err());
        assert!(config.build_bot().is_err());

        config.telegram_api_url = Some("http://localhost:8081".to_string());
        assert!(config.build_bot().is_ok());
    }
}
