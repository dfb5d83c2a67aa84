//! Core types: chat destination, inbound turn, handler response, and the
//! [`Handler`] trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Chat destination. `id` is the Telegram chat id when the Telegram gateway
/// is in play; other transports map their own addressing onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// One inbound user message bound to its originating chat.
///
/// A turn lives for a single request/response cycle and carries no history;
/// nothing outlives the reply. `text` is non-empty: the dispatch loop only
/// builds turns from messages that actually carry text. `user_id` is kept for
/// logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub chat: Chat,
    pub user_id: i64,
    pub text: String,
}

impl Turn {
    pub fn new(chat: Chat, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat,
            user_id,
            text: text.into(),
        }
    }
}

/// Outcome of one handler looking at a turn.
///
/// `Reply` carries the outbound body so the dispatch loop and tests can
/// observe what was sent without asking the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not mine; pass the turn to the next handler.
    Continue,
    /// Claimed; stop the chain without a response body.
    Stop,
    /// Claimed and answered; stop the chain with the reply text.
    Reply(String),
}

/// One handler in the chain.
///
/// Handlers own their side effects (sending through the gateway, calling the
/// pipeline); the chain only routes. Errors bubble up to the dispatch loop,
/// which logs them and drops the turn.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, turn: &Turn) -> Result<HandlerResponse>;
}
