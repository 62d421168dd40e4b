//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};
use trendbot_core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;

/// Drops updates queued while the bot was offline, then starts the long-polling REPL.
/// Each text message runs the handler chain in its own task so the REPL returns immediately.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    bot.delete_webhook().drop_pending_updates(true).await?;
    info!("Dropped pending updates");

    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity");
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
