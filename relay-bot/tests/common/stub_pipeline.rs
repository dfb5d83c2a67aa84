//! Canned [`TextGenPipeline`] for tests: fixed output, call count, prompt
//! capture, optional failure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use textgen_client::{SamplingConfig, TextGenPipeline};

pub struct StubPipeline {
    output: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    sampling_seen: Mutex<Vec<SamplingConfig>>,
    fail: bool,
}

impl StubPipeline {
    /// Pipeline that answers every prompt with `output`.
    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            sampling_seen: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Pipeline that fails every request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn sampling_seen(&self) -> Vec<SamplingConfig> {
        self.sampling_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenPipeline for StubPipeline {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.sampling_seen.lock().unwrap().push(sampling.clone());
        if self.fail {
            anyhow::bail!("pipeline rejected by stub");
        }
        Ok(self.output.clone())
    }
}
