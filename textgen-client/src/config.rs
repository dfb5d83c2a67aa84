//! Sampling parameters for generation requests.

/// Default llama-server address when `LLAMA_SERVER_URL` is unset.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Sampling parameters for one generation request.
///
/// The relay uses [`SamplingConfig::default`] for every turn; nothing at
/// runtime reconfigures it.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Upper bound on generated tokens; the prompt does not count.
    pub max_new_tokens: u32,
    /// When false the request decodes greedily (temperature forced to zero)
    /// and the remaining knobs have no effect.
    pub do_sample: bool,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            do_sample: true,
            temperature: 0.7,
            top_k: 50,
            top_p: 0.95,
        }
    }
}
