//! /start handler: fixed greeting, no pipeline involvement.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Gateway, Handler, HandlerResponse, Result, Turn};
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Greeting sent for every /start, first or repeated; the relay keeps no
/// session state to make a distinction with.
pub const START_GREETING: &str =
    "Hello! I am your AI Assistant running locally. Ask me about animals!";

/// Claims `/start` turns and replies with [`START_GREETING`]. Everything else
/// falls through to the next handler.
pub struct StartHandler {
    gateway: Arc<dyn Gateway>,
    /// Username cache filled from `getMe` before polling starts; lets the
    /// handler accept `/start@this_bot` and leave `/start@other_bot` alone.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl StartHandler {
    pub fn new(gateway: Arc<dyn Gateway>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            gateway,
            bot_username,
        }
    }
}

/// True when `text` is the /start command addressed to this bot: `/start`,
/// `/start <payload>`, or `/start@<username>` (usernames compare
/// case-insensitively, as Telegram treats them). `/startle` and commands
/// addressed to another bot do not match.
fn is_start_command(text: &str, bot_username: Option<&str>) -> bool {
    let Some(rest) = text.strip_prefix("/start") else {
        return false;
    };
    match rest.as_bytes().first() {
        None | Some(b' ') => true,
        Some(b'@') => {
            let target = rest[1..].split_whitespace().next().unwrap_or("");
            bot_username.is_some_and(|name| target.eq_ignore_ascii_case(name))
        }
        Some(_) => false,
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, turn))]
    async fn handle(&self, turn: &Turn) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !is_start_command(&turn.text, username.as_deref()) {
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = turn.user_id,
            chat_id = turn.chat.id,
            "step: /start greeting"
        );
        self.gateway.send_message(&turn.chat, START_GREETING).await?;
        Ok(HandlerResponse::Reply(START_GREETING.to_string()))
    }
}
