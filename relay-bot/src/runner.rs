//! Dispatch loop: teloxide messages become [`Turn`]s handed to the
//! [`HandlerChain`]; each turn is handled in a spawned task so polling never
//! waits on generation.

use std::sync::Arc;

use anyhow::Result;
use relay_core::{init_tracing, Chat, HandlerChain, Turn};
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::components::{build_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, set up logging, assemble components, poll.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let components = build_components(&config);
    let chain = build_handler_chain(&components);

    info!(
        llama_server_url = %config.llama_server_url,
        "Relay bot starting, polling for messages"
    );

    run_repl(components.teloxide_bot, chain, components.bot_username).await
}

/// Converts one teloxide message into a core [`Turn`]. `None` for messages
/// without text (stickers, photos) and for empty text; those produce no turn
/// and no reply.
pub fn turn_from_message(msg: &teloxide::types::Message) -> Option<Turn> {
    let text = msg.text()?;
    if text.is_empty() {
        return None;
    }
    let user_id = msg.from.as_ref().map(|u| u.id.0 as i64).unwrap_or(0);
    Some(Turn::new(Chat { id: msg.chat.id.0 }, user_id, text))
}

/// Starts polling with the given bot and chain. Calls `getMe` once and writes
/// the username into `bot_username` before the first update; every message is
/// converted to a [`Turn`] and handled in a spawned task so the repl callback
/// returns immediately.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            *bot_username.write().await = Some(username.clone());
            info!(username = %username, "Bot username set before repl");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let Some(turn) = turn_from_message(&msg) else {
                info!(chat_id = msg.chat.id.0, "Received non-text message, skipping");
                return Ok(());
            };

            info!(
                user_id = turn.user_id,
                chat_id = turn.chat.id,
                message_content = %turn.text,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&turn).await {
                    error!(error = %e, user_id = turn.user_id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
