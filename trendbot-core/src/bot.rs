//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the app crate implements it over teloxide and tests use a mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Destination, Message};

/// Identifies a message the transport accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i32,
}

/// Abstraction for sending messages. Text is HTML-formatted (bold, code, links).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message to a chat or channel and returns where it landed.
    async fn send_message(&self, destination: &Destination, text: &str) -> Result<SentMessage>;

    /// Sends a reply into the chat the given message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<SentMessage> {
        self.send_message(&Destination::Id(message.chat.id), text)
            .await
    }
}
