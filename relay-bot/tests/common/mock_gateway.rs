//! Mock [`Gateway`] recording outbound traffic.
//!
//! Records every `send_message` and counts `send_typing` calls; typing can be
//! configured to fail so tests can exercise the best-effort contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use relay_core::{Chat, Gateway, RelayError, Result};

/// One recorded `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

pub struct MockGateway {
    sent: Mutex<Vec<SentMessage>>,
    typing_calls: AtomicUsize,
    fail_typing: bool,
    fail_send: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            typing_calls: AtomicUsize::new(0),
            fail_typing: false,
            fail_send: false,
        }
    }

    /// Gateway whose typing action always fails; sends still succeed.
    pub fn with_failing_typing() -> Self {
        Self {
            fail_typing: true,
            ..Self::new()
        }
    }

    /// Gateway whose sends always fail; typing still succeeds.
    pub fn with_failing_send() -> Self {
        Self {
            fail_send: true,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn typing_count(&self) -> usize {
        self.typing_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_send {
            return Err(RelayError::Gateway("send rejected by mock".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        self.typing_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_typing {
            return Err(RelayError::Gateway("typing rejected by mock".to_string()));
        }
        Ok(())
    }
}
