//! Bot configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Relay configuration: Telegram connectivity, engine address, log location.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// `TELEGRAM_TOKEN` (required).
    pub bot_token: String,
    /// `TELEGRAM_API_URL`: Bot API base override. Tests point this at a mock
    /// server; unset in production.
    pub telegram_api_url: Option<String>,
    /// `LLAMA_SERVER_URL` (default `http://127.0.0.1:8080`).
    pub llama_server_url: String,
    /// `LOG_FILE` (default `logs/relay-bot.log`).
    pub log_file: String,
}

impl BotConfig {
    /// Loads config from the environment. `token` overrides `TELEGRAM_TOKEN`
    /// when provided. Fails when neither is present, before any network
    /// activity has a chance to happen.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_TOKEN")
                .context("TELEGRAM_TOKEN not set. Put it in .env or the environment")?,
        };

        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let llama_server_url = env::var("LLAMA_SERVER_URL")
            .unwrap_or_else(|_| textgen_client::DEFAULT_SERVER_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/relay-bot.log".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            llama_server_url,
            log_file,
        })
    }

    /// Validates URL-shaped settings; both must parse when present.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if reqwest::Url::parse(&self.llama_server_url).is_err() {
            anyhow::bail!(
                "LLAMA_SERVER_URL is not a valid URL: {}",
                self.llama_server_url
            );
        }
        Ok(())
    }
}
