//! Command-line interface for the relay bot.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram relay for a local llama-server", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay with config from the environment
    Run {
        /// Telegram bot token (overrides env TELEGRAM_TOKEN)
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads [`BotConfig`] from the environment; `token` takes precedence over
/// `TELEGRAM_TOKEN`.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
