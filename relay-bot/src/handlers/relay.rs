//! Relay handler: wrap the turn in the chat template, generate once, extract
//! the assistant reply, send it back.

use std::sync::Arc;

use async_trait::async_trait;
use chat_template::{extract_reply, has_assistant_turn, wrap_prompt};
use relay_core::{Gateway, Handler, HandlerResponse, RelayError, Result, Turn};
use textgen_client::{SamplingConfig, TextGenPipeline};
use tracing::{info, instrument, warn};

/// Relays free-text turns to the text-generation pipeline.
///
/// Text starting with '/' is left for other handlers, so an unclaimed command
/// gets no reply at all. Pipeline and gateway faults propagate to the
/// dispatch loop: the user sees silence, never an error message.
pub struct RelayHandler {
    gateway: Arc<dyn Gateway>,
    pipeline: Arc<dyn TextGenPipeline>,
    sampling: SamplingConfig,
}

impl RelayHandler {
    /// Builds the handler around shared gateway and pipeline handles.
    /// Sampling is the fixed default configuration for every turn.
    pub fn new(gateway: Arc<dyn Gateway>, pipeline: Arc<dyn TextGenPipeline>) -> Self {
        Self {
            gateway,
            pipeline,
            sampling: SamplingConfig::default(),
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, turn))]
    async fn handle(&self, turn: &Turn) -> Result<HandlerResponse> {
        if turn.text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }

        // Best-effort: the reply must go out even when the typing action fails.
        if let Err(e) = self.gateway.send_typing(&turn.chat).await {
            warn!(
                error = %e,
                chat_id = turn.chat.id,
                "Failed to send typing action"
            );
        }

        let prompt = wrap_prompt(&turn.text);
        let generated = self
            .pipeline
            .generate(&prompt, &self.sampling)
            .await
            .map_err(|e| RelayError::Engine(format!("{:#}", e)))?;

        if !has_assistant_turn(&generated) {
            warn!(
                user_id = turn.user_id,
                "Pipeline output carried no assistant delimiter; relaying it whole"
            );
        }
        let reply = extract_reply(&generated);

        self.gateway.send_message(&turn.chat, reply).await?;
        info!(
            user_id = turn.user_id,
            chat_id = turn.chat.id,
            reply_len = reply.len(),
            "step: relay reply sent"
        );
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}
