//! # TrendBot
//!
//! Telegram bot that posts affiliate offers to a channel every few hours and runs a referral
//! programme. Wires trendbot-core, handler-chain, storage and offers; loads config from env and
//! runs the teloxide REPL alongside the posting scheduler.

pub mod cli;
pub mod config;
pub mod copywriter;
pub mod handlers;
pub mod runner;
pub mod scheduler;
pub mod service;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::{AppSettings, BaseConfig, BotConfig, OpenAiSettings};
pub use copywriter::{Copywriter, OpenAiCopywriter};
pub use handlers::{ActivityHandler, CommandHandler};
pub use runner::{build_handler_chain, build_service, post_once, render_manifest, run_bot, seed};
pub use scheduler::spawn_post_scheduler;
pub use service::{PostOutcome, StartReply, TrendBotService, WelcomeKind};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
