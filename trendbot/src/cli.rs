//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trendbot")]
#[command(about = "TrendBot: affiliate offers for Telegram channels, with referrals", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot: answer commands and post to the channel on a schedule.
    Run {
        /// Overrides TELEGRAM_BOT_TOKEN
        #[arg(short, long)]
        token: Option<String>,
        /// Overrides TELEGRAM_CHANNEL_ID (`@name` or numeric id)
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Post one offer to the channel and exit.
    Post {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Generate offers into the database (DATABASE_URL).
    Seed {
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
    /// Parse and print the dependency manifest (bundled one unless --path is given).
    Deps {
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Comments stripped, entries sorted
        #[arg(long, conflicts_with = "json")]
        canonical: bool,
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_overrides() {
        let cli = Cli::try_parse_from(["trendbot", "run", "-t", "123:abc", "--channel", "@deals"])
            .unwrap();
        match cli.command {
            Commands::Run { token, channel } => {
                assert_eq!(token.as_deref(), Some("123:abc"));
                assert_eq!(channel.as_deref(), Some("@deals"));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn seed_count_defaults_to_twenty() {
        let cli = Cli::try_parse_from(["trendbot", "seed"]).unwrap();
        assert!(matches!(cli.command, Commands::Seed { count: 20 }));
    }

    #[test]
    fn deps_flags_conflict() {
        assert!(Cli::try_parse_from(["trendbot", "deps", "--canonical", "--json"]).is_err());
        let cli = Cli::try_parse_from(["trendbot", "deps", "--canonical"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Deps { canonical: true, json: false, path: None }
        ));
    }
}
