//! Handler that logs every incoming message in before() and the outcome in after().

use async_trait::async_trait;
use tracing::{info, instrument};
use trendbot_core::{Handler, HandlerResponse, Message, Result};

/// Logs traffic; never stops the chain.
#[derive(Clone, Default)]
pub struct ActivityHandler;

impl ActivityHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for ActivityHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            username = ?message.user.username,
            content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "replied",
            HandlerResponse::Stop => "stopped",
            HandlerResponse::Ignore => "ignored",
            HandlerResponse::Continue => "unhandled",
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            outcome = outcome,
            "Message processed"
        );
        Ok(())
    }
}
