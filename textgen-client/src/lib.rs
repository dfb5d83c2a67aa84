//! # Text-generation pipeline abstraction
//!
//! Defines the [`TextGenPipeline`] trait and the llama.cpp server
//! implementation. Transport-agnostic; the relay handlers only see the trait
//! and tests substitute canned pipelines.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod llama_server;

pub use config::{SamplingConfig, DEFAULT_SERVER_URL};
pub use llama_server::LlamaServerClient;

/// Text-generation pipeline: one prompt in, one block of generated text out.
///
/// Implementations may echo the prompt in front of the continuation or return
/// only the continuation; callers recover the reply with
/// `chat_template::extract_reply` either way. The pipeline holds whatever
/// model state it needs; handles are shared read-only across handler tasks.
#[async_trait]
pub trait TextGenPipeline: Send + Sync {
    /// Returns generated text for `prompt` under the given sampling settings.
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String>;
}
