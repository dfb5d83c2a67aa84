//! llama.cpp server implementation of [`TextGenPipeline`].
//!
//! Talks to the native `POST /completion` endpoint of a locally running
//! `llama-server`. The server loads the model once at startup and keeps it
//! resident; this client carries no model state of its own.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{SamplingConfig, TextGenPipeline};

/// Request body for `/completion`. Field names follow the llama-server API.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

/// Response body; only the generated text is used.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

/// HTTP client for a llama.cpp `llama-server`.
///
/// Cheap to clone and safe to share across tasks. No request timeout is set:
/// generation latency is unbounded on small hardware and the turn simply
/// waits for the reply.
#[derive(Clone)]
pub struct LlamaServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl LlamaServerClient {
    /// Creates a client for the server at `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn completion_url(&self) -> String {
        format!("{}/completion", self.base_url)
    }
}

#[async_trait]
impl TextGenPipeline for LlamaServerClient {
    #[instrument(skip(self, prompt, sampling))]
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String> {
        // llama-server has no sampling on/off switch; zero temperature is greedy.
        let temperature = if sampling.do_sample {
            sampling.temperature
        } else {
            0.0
        };
        let request = CompletionRequest {
            prompt,
            n_predict: sampling.max_new_tokens,
            temperature,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
        };

        let response = self
            .http
            .post(self.completion_url())
            .json(&request)
            .send()
            .await
            .context("llama-server request failed")?
            .error_for_status()
            .context("llama-server returned an error status")?;

        let body: CompletionResponse = response
            .json()
            .await
            .context("llama-server response was not valid completion JSON")?;

        debug!(
            generated_len = body.content.len(),
            "Pipeline returned continuation"
        );
        Ok(body.content)
    }
}
