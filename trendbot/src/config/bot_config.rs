//! BotConfig: BaseConfig + AppSettings + optional OpenAI settings. Use load() for env-based loading.

use anyhow::Result;
use trendbot_core::Destination;

use super::{AppSettings, BaseConfig, OpenAiSettings};

/// Full bot config. Call validate() after load() to fail fast before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub app: AppSettings,
    pub openai: Option<OpenAiSettings>,
}

impl BotConfig {
    /// Load full config from environment variables. `token` and `channel` override
    /// TELEGRAM_BOT_TOKEN and TELEGRAM_CHANNEL_ID.
    pub fn load(token: Option<String>, channel: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token, channel)?;
        let app = AppSettings::from_env()?;
        let openai = OpenAiSettings::from_env();
        Ok(Self { base, app, openai })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.app.validate()?;
        if let Some(ref openai) = self.openai {
            openai.validate()?;
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn channel(&self) -> &Destination {
        &self.base.channel
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
