//! Wiring: builds the service and handler chain from config and runs the bot, a one-off post,
//! catalogue seeding, or the manifest listing.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use manifest::Manifest;
use std::path::Path;
use std::sync::Arc;
use storage::TrendRepository;
use tracing::{error, info, instrument};
use trendbot_core::Bot;

use crate::config::BotConfig;
use crate::copywriter::OpenAiCopywriter;
use crate::handlers::{ActivityHandler, CommandHandler};
use crate::scheduler::spawn_post_scheduler;
use crate::service::TrendBotService;
use crate::telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};

/// Opens the database and builds the service around `bot`. The copywriter is enabled when
/// OpenAI settings are present.
#[instrument(skip(config, bot))]
pub async fn build_service(config: &BotConfig, bot: Arc<dyn Bot>) -> Result<Arc<TrendBotService>> {
    let repo = open_repository(config.database_url()).await?;
    let mut service = TrendBotService::new(repo, bot, config.channel().clone(), config.app.clone())?;
    if let Some(ref openai) = config.openai {
        info!(model = %openai.model, "Copywriter enabled");
        service = service.with_copywriter(Arc::new(OpenAiCopywriter::from_settings(openai)));
    }
    Ok(Arc::new(service))
}

/// ActivityHandler then CommandHandler.
pub fn build_handler_chain(service: Arc<TrendBotService>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(ActivityHandler::new()))
        .add_handler(Arc::new(CommandHandler::new(service, bot)))
}

async fn open_repository(database_url: &str) -> Result<TrendRepository> {
    TrendRepository::new(database_url).await.map_err(|e| {
        error!(error = %e, database_url = %database_url, "Failed to initialize storage");
        anyhow::anyhow!("Failed to initialize storage: {}", e)
    })
}

/// Main entry: validate config, seed the catalogue, start the scheduler, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(
        database_url = %config.database_url(),
        channel = %config.channel(),
        "Initializing TrendBot"
    );

    let teloxide_bot = build_teloxide_bot(&config.base);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let service = build_service(&config, bot.clone()).await?;

    let seeded = service.ensure_offers().await?;
    if seeded > 0 {
        info!(count = seeded, "Generated initial offers");
    }

    let (first_delay, interval) = service.schedule();
    let scheduler = spawn_post_scheduler(service.clone(), first_delay, interval);
    let chain = build_handler_chain(service, bot);

    info!(channel = %config.channel(), "TrendBot started");
    let result = run_repl(teloxide_bot, chain).await;
    scheduler.abort();
    result
}

/// Posts a single offer and exits.
#[instrument(skip(config))]
pub async fn post_once(config: BotConfig) -> Result<()> {
    config.validate()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(build_teloxide_bot(&config.base)));
    let service = build_service(&config, bot).await?;
    let outcome = service.post_to_channel().await?;
    println!(
        "Posted offer {} to {} (message {})",
        outcome.offer_id,
        config.channel(),
        outcome.message_id
    );
    Ok(())
}

/// Adds `count` generated offers to the catalogue at `database_url`.
#[instrument]
pub async fn seed(database_url: &str, count: usize) -> Result<usize> {
    let repo = open_repository(database_url).await?;
    let generator = offers::OfferGenerator::new()?;
    let ids = repo.save_offers(&generator.generate(count)).await?;
    let total = repo.count_offers().await?;
    info!(added = ids.len(), total = total, "Seeded offers");
    Ok(ids.len())
}

/// Renders the manifest at `path` (or the bundled one) as plain lines, canonical form or JSON.
pub fn render_manifest(path: Option<&Path>, canonical: bool, json: bool) -> Result<String> {
    let manifest = match path {
        Some(path) => Manifest::from_path(path)?,
        None => Manifest::bundled()?,
    };
    if json {
        return serde_json::to_string_pretty(&manifest).context("failed to serialize manifest");
    }
    if canonical {
        return Ok(manifest.to_canonical_string());
    }

    let mut out = String::new();
    for req in manifest.requirements() {
        let pin = if req.is_pinned() { "pinned" } else { "unpinned" };
        out.push_str(&format!("{:<24} {}\n", req.to_string(), pin));
    }
    out.push_str(&format!(
        "{} packages ({} pinned)\n",
        manifest.len(),
        manifest.pinned().count()
    ));
    Ok(out)
}
