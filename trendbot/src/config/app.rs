//! Application settings: posting cadence, referral programme, optional copywriter.

use anyhow::Result;
use std::time::Duration;

use super::env::{first_var, parse_var};

pub const DEFAULT_BOT_USERNAME: &str = "LuxuryTrendBot";
pub const DEFAULT_POST_INTERVAL_SECS: u64 = 14_400;
pub const DEFAULT_POST_FIRST_DELAY_SECS: u64 = 10;
pub const DEFAULT_REFERRAL_REWARD: f64 = 5.0;
pub const DEFAULT_INITIAL_OFFER_COUNT: usize = 30;
pub const DEFAULT_COPYWRITER_TIMEOUT_SECS: f64 = 30.0;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// BOT_USERNAME, used in referral deep links.
    pub bot_username: String,
    /// POST_INTERVAL_SECS
    pub post_interval_secs: u64,
    /// POST_FIRST_DELAY_SECS
    pub post_first_delay_secs: u64,
    /// REFERRAL_REWARD, credited per confirmed referral.
    pub referral_reward: f64,
    /// INITIAL_OFFER_COUNT, offers generated when the catalogue is empty at startup.
    pub initial_offer_count: usize,
    /// COPYWRITER_TIMEOUT_SECS, deadline for one polishing call before the draft is posted.
    pub copywriter_timeout_secs: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            bot_username: DEFAULT_BOT_USERNAME.to_string(),
            post_interval_secs: DEFAULT_POST_INTERVAL_SECS,
            post_first_delay_secs: DEFAULT_POST_FIRST_DELAY_SECS,
            referral_reward: DEFAULT_REFERRAL_REWARD,
            initial_offer_count: DEFAULT_INITIAL_OFFER_COUNT,
            copywriter_timeout_secs: DEFAULT_COPYWRITER_TIMEOUT_SECS,
        }
    }
}

impl AppSettings {
    pub fn from_env() -> Result<Self> {
        let bot_username = first_var(&["BOT_USERNAME"])
            .map(|u| u.trim_start_matches('@').to_string())
            .unwrap_or_else(|| DEFAULT_BOT_USERNAME.to_string());
        Ok(Self {
            bot_username,
            post_interval_secs: parse_var("POST_INTERVAL_SECS", DEFAULT_POST_INTERVAL_SECS)?,
            post_first_delay_secs: parse_var(
                "POST_FIRST_DELAY_SECS",
                DEFAULT_POST_FIRST_DELAY_SECS,
            )?,
            referral_reward: parse_var("REFERRAL_REWARD", DEFAULT_REFERRAL_REWARD)?,
            initial_offer_count: parse_var("INITIAL_OFFER_COUNT", DEFAULT_INITIAL_OFFER_COUNT)?,
            copywriter_timeout_secs: parse_var(
                "COPYWRITER_TIMEOUT_SECS",
                DEFAULT_COPYWRITER_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_username.is_empty()
            || !self
                .bot_username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            anyhow::bail!("BOT_USERNAME is not a valid Telegram username: {}", self.bot_username);
        }
        if self.post_interval_secs == 0 {
            anyhow::bail!("POST_INTERVAL_SECS must be greater than 0");
        }
        if !self.referral_reward.is_finite() || self.referral_reward < 0.0 {
            anyhow::bail!("REFERRAL_REWARD must be a non-negative amount");
        }
        if !self.copywriter_timeout_secs.is_finite() || self.copywriter_timeout_secs <= 0.0 {
            anyhow::bail!("COPYWRITER_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn post_interval(&self) -> Duration {
        Duration::from_secs(self.post_interval_secs)
    }

    pub fn post_first_delay(&self) -> Duration {
        Duration::from_secs(self.post_first_delay_secs)
    }

    pub fn copywriter_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.copywriter_timeout_secs)
            .unwrap_or(Duration::from_secs_f64(DEFAULT_COPYWRITER_TIMEOUT_SECS))
    }
}

/// OpenAI settings; present only when OPENAI_API_KEY is set.
#[derive(Clone, PartialEq)]
pub struct OpenAiSettings {
    pub api_key: String,
    /// OPENAI_BASE_URL
    pub base_url: String,
    /// MODEL
    pub model: String,
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &openai_client::mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiSettings {
    pub fn from_env() -> Option<Self> {
        let api_key = first_var(&["OPENAI_API_KEY"])?;
        Some(Self {
            api_key,
            base_url: first_var(&["OPENAI_BASE_URL"])
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: first_var(&["MODEL"]).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.base_url);
        }
        Ok(())
    }
}
