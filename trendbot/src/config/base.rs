//! Base config: Telegram Bot connection, target channel, logging, database. Loaded from env.

use anyhow::Result;
use trendbot_core::{BotError, Destination};

use super::env::{database_url_from_env, first_var, log_file_from_env};

/// Base config: Telegram-related, logging, database only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_CHANNEL_ID: `@name` or numeric id
    pub channel: Destination,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// SQLite path or URL
    pub database_url: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` and `channel` override the env when provided.
    pub fn load(token: Option<String>, channel: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| first_var(&["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"]))
            .ok_or_else(|| BotError::Config("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set".into()))?;
        let channel_raw = channel
            .filter(|c| !c.trim().is_empty())
            .or_else(|| first_var(&["TELEGRAM_CHANNEL_ID"]))
            .ok_or_else(|| BotError::Config("TELEGRAM_CHANNEL_ID not set".into()))?;
        let channel = channel_raw.parse::<Destination>().map_err(|_| {
            BotError::Config(format!("TELEGRAM_CHANNEL_ID is not a valid chat: {}", channel_raw))
        })?;
        let telegram_api_url = first_var(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]);

        Ok(Self {
            bot_token,
            channel,
            telegram_api_url,
            log_file: log_file_from_env(),
            database_url: database_url_from_env(),
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
