//! Outbound gateway abstraction and its Telegram implementation.
//!
//! [`Gateway`] is the transport seam: handlers send through it and tests mock
//! it. [`TelegramGateway`] maps it onto teloxide.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::debug;

use crate::error::{RelayError, Result};
use crate::types::Chat;

/// Outbound capability of the messaging transport: plain-text send plus the
/// transient "typing" status.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Signals the "typing" chat action. On Telegram the indicator shows for
    /// about five seconds or until the next message arrives. Callers treat
    /// failures here as best-effort.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}

/// Teloxide-backed [`Gateway`].
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    /// Wraps an already configured teloxide [`Bot`].
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Gateway for TelegramGateway {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;
        debug!(chat_id = chat.id, text_len = text.len(), "Message sent");
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;
        Ok(())
    }
}
