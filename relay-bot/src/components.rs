//! Component assembly: gateway, pipeline, and the handler chain.

use std::sync::Arc;

use relay_core::{Gateway, HandlerChain, TelegramGateway};
use teloxide::prelude::*;
use textgen_client::{LlamaServerClient, TextGenPipeline};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::handlers::{RelayHandler, StartHandler};

/// Shared dependencies for the dispatch loop, produced once at startup.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub gateway: Arc<dyn Gateway>,
    /// Single pipeline handle, shared read-only by every handler task.
    pub pipeline: Arc<dyn TextGenPipeline>,
    /// Filled from `getMe` before polling starts.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds the components from config: the teloxide [`Bot`] (honoring the
/// `TELEGRAM_API_URL` override), the Telegram gateway, and the llama-server
/// pipeline client.
pub fn build_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => {
                    info!(api_url = %url_str, "Using Telegram API URL override");
                    bot.set_api_url(url)
                }
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    info!(
        server_url = %config.llama_server_url,
        "Using llama-server text-generation pipeline"
    );
    let gateway: Arc<dyn Gateway> = Arc::new(TelegramGateway::new(teloxide_bot.clone()));
    let pipeline: Arc<dyn TextGenPipeline> =
        Arc::new(LlamaServerClient::new(config.llama_server_url.clone()));
    let bot_username = Arc::new(RwLock::new(None));

    BotComponents {
        teloxide_bot,
        gateway,
        pipeline,
        bot_username,
    }
}

/// Builds the production chain from assembled components: /start greeting
/// first, then the relay.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    build_handler_chain_with(
        components.gateway.clone(),
        components.pipeline.clone(),
        components.bot_username.clone(),
    )
}

/// Chain assembly from explicit handles; integration tests pass mocks here.
pub fn build_handler_chain_with(
    gateway: Arc<dyn Gateway>,
    pipeline: Arc<dyn TextGenPipeline>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(gateway.clone(), bot_username)))
        .add_handler(Arc::new(RelayHandler::new(gateway, pipeline)))
}
