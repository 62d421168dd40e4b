//! Wraps teloxide::Bot and implements [`trendbot_core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode, Recipient};
use tracing::error;
use trendbot_core::{Bot as CoreBot, BotError, Destination, Result, SentMessage};

use crate::config::BaseConfig;

/// Thin wrapper around teloxide::Bot. Every message is sent with the HTML parse mode.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn recipient(destination: &Destination) -> Recipient {
    match destination {
        Destination::Id(id) => Recipient::Id(ChatId(*id)),
        Destination::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, destination: &Destination, text: &str) -> Result<SentMessage> {
        let sent = self
            .bot
            .send_message(recipient(destination), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(SentMessage {
            chat_id: sent.chat.id.0,
            message_id: sent.id.0,
        })
    }
}

/// Builds the teloxide bot from config, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BaseConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}
