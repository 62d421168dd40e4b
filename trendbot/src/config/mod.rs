//! Bot configuration: BaseConfig (Telegram + log + DB) + AppSettings (posting, referrals) +
//! optional OpenAI settings for the copywriter.

mod app;
mod base;
mod bot_config;
mod env;


pub use app::{AppSettings, OpenAiSettings};
pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use env::{database_url_from_env, log_file_from_env};
