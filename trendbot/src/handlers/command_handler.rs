//! Dispatches slash commands to [`TrendBotService`] and replies in the same chat.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};
use trendbot_core::{Bot, Command, Handler, HandlerError, HandlerResponse, Message, Result};

use crate::service::TrendBotService;

/// Handles `/start`, `/help`, `/status`, `/stats`, `/post`, `/referral`, `/leaderboard`.
/// Anything else is ignored.
#[derive(Clone)]
pub struct CommandHandler {
    service: Arc<TrendBotService>,
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(service: Arc<TrendBotService>, bot: Arc<dyn Bot>) -> Self {
        Self { service, bot }
    }

    /// Reply text for `command`, or None for commands this bot does not know.
    async fn dispatch(&self, command: &Command, message: &Message) -> anyhow::Result<Option<String>> {
        let text = match command.name.as_str() {
            "start" => {
                let reply = self.service.start(&message.user, command.first_arg()).await?;
                info!(user_id = message.user.id, kind = ?reply.kind, "Welcomed user");
                reply.text
            }
            "help" => self.service.help(),
            "status" => self.service.status().await?,
            "stats" => self.service.offer_stats().await?,
            "post" => self.service.post_command().await,
            "referral" => self.service.referral(&message.user).await?,
            "leaderboard" => self.service.leaderboard().await?,
            _ => return Ok(None),
        };
        Ok(Some(text))
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };
        if !command.is_addressed_to(&self.service.settings().bot_username) {
            info!(command = %command.name, target = ?command.target, "Command addressed to another bot");
            return Ok(HandlerResponse::Ignore);
        }

        let text = match self.dispatch(&command, message).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!(command = %command.name, "Unknown command");
                return Ok(HandlerResponse::Ignore);
            }
            Err(e) => {
                error!(error = %e, command = %command.name, "Command failed");
                return Err(HandlerError::Command {
                    command: command.name.clone(),
                    reason: format!("{:#}", e),
                }
                .into());
            }
        };

        self.bot.reply_to(message, &text).await?;
        info!(command = %command.name, "Replied to command");
        Ok(HandlerResponse::Reply(text))
    }
}
