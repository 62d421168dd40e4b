//! `trendbot` binary.

use anyhow::Result;
use clap::Parser;
use trendbot::config::{database_url_from_env, log_file_from_env};
use trendbot::{post_once, render_manifest, run_bot, seed, BotConfig, Cli, Commands};
use trendbot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, channel } => {
            init_tracing(&log_file_from_env())?;
            let config = BotConfig::load(token, channel)?;
            run_bot(config).await
        }
        Commands::Post { token, channel } => {
            init_tracing(&log_file_from_env())?;
            let config = BotConfig::load(token, channel)?;
            post_once(config).await
        }
        Commands::Seed { count } => {
            init_tracing(&log_file_from_env())?;
            let added = seed(&database_url_from_env(), count).await?;
            println!("Added {} offers", added);
            Ok(())
        }
        Commands::Deps {
            path,
            canonical,
            json,
        } => {
            print!("{}", render_manifest(path.as_deref(), canonical, json)?);
            Ok(())
        }
    }
}
