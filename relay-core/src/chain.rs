//! # Handler chain
//!
//! Runs handlers in order for each turn; the first handler that returns Stop
//! or Reply ends execution. A turn no handler claims falls off the end as
//! Continue and nothing is sent for it.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Turn};

/// Ordered chain of handlers. Cloning is cheap; handlers are shared.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the chain).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in order. Returns the first Stop or Reply, or Continue
    /// when every handler passed. The first handler error aborts the chain.
    #[instrument(skip(self, turn))]
    pub async fn handle(&self, turn: &Turn) -> Result<HandlerResponse> {
        info!(
            user_id = turn.user_id,
            chat_id = turn.chat.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(turn).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = turn.user_id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue => {}
            }
        }

        info!(
            user_id = turn.user_id,
            chat_id = turn.chat.id,
            "step: handler chain finished, no handler claimed the turn"
        );
        Ok(HandlerResponse::Continue)
    }
}
