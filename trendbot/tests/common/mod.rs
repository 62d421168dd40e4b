//! Shared helpers for TrendBot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use std::sync::Arc;
use storage::TrendRepository;
use trendbot::{AppSettings, TrendBotService};
use trendbot_core::{Bot, Chat, Destination, Message, MessageDirection, User};

pub use mock_bot::{drain, MockBot, SentRecord};

pub const CHANNEL: &str = "@trend_deals";

pub fn channel() -> Destination {
    Destination::Username(CHANNEL.to_string())
}

pub async fn memory_repo() -> TrendRepository {
    TrendRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

/// Service over an in-memory database, default settings, posting to [`CHANNEL`].
pub async fn service_with(bot: Arc<dyn Bot>) -> TrendBotService {
    TrendBotService::new(memory_repo().await, bot, channel(), AppSettings::default())
        .expect("Failed to build service")
}

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        username: Some(first_name.to_lowercase()),
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

/// A private-chat text message from `user` (chat id == user id).
pub fn message(user: &User, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user.clone(),
        chat: Chat {
            id: user.id,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// A text message from `user` in a supergroup chat.
pub fn group_message(user: &User, chat_id: i64, text: &str) -> Message {
    Message {
        chat: Chat {
            id: chat_id,
            chat_type: "supergroup".to_string(),
        },
        ..message(user, text)
    }
}
