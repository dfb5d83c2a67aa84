//! Integration tests for [`textgen_client::LlamaServerClient`] against a mock
//! llama-server.
//!
//! Covers: the wire fields sent to `/completion` (sampling knobs and prompt),
//! content extraction from the response, the greedy mapping when sampling is
//! off, and error propagation for HTTP and body failures.

use mockito::Matcher;
use textgen_client::{LlamaServerClient, SamplingConfig, TextGenPipeline};

/// **Test: generate posts the prompt and the fixed sampling knobs, and
/// returns the `content` field.**
///
/// **Setup:** Mock `/completion` requiring `n_predict=100`, `temperature=0.7`,
/// `top_k=50`, `top_p=0.95` and the exact prompt.
/// **Expected:** Ok("WORLD"); the mock was hit exactly once.
#[tokio::test]
async fn generate_sends_sampling_fields_and_parses_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completion")
        .match_body(Matcher::PartialJsonString(
            r#"{
                "prompt": "<|user|>\nHELLO</s>\n<|assistant|>\n",
                "n_predict": 100,
                "temperature": 0.7,
                "top_k": 50,
                "top_p": 0.95
            }"#
            .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": "WORLD"}"#)
        .create_async()
        .await;

    let client = LlamaServerClient::new(server.url());
    let generated = client
        .generate(
            "<|user|>\nHELLO</s>\n<|assistant|>\n",
            &SamplingConfig::default(),
        )
        .await
        .unwrap();

    assert_eq!(generated, "WORLD");
    mock.assert_async().await;
}

/// **Test: do_sample=false is sent as temperature 0.0 (greedy decoding).**
#[tokio::test]
async fn generate_greedy_maps_to_zero_temperature() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completion")
        .match_body(Matcher::PartialJsonString(
            r#"{"temperature": 0.0, "n_predict": 12}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": "greedy"}"#)
        .create_async()
        .await;

    let sampling = SamplingConfig {
        max_new_tokens: 12,
        do_sample: false,
        ..SamplingConfig::default()
    };
    let client = LlamaServerClient::new(server.url());
    let generated = client.generate("prompt", &sampling).await.unwrap();

    assert_eq!(generated, "greedy");
    mock.assert_async().await;
}

/// **Test: a non-2xx status surfaces as an error, not as empty text.**
#[tokio::test]
async fn generate_propagates_http_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/completion")
        .with_status(500)
        .with_body("model load failed")
        .create_async()
        .await;

    let client = LlamaServerClient::new(server.url());
    let result = client.generate("prompt", &SamplingConfig::default()).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("error status"));
}

/// **Test: a 200 with a non-completion body surfaces as a parse error.**
#[tokio::test]
async fn generate_rejects_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/completion")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let client = LlamaServerClient::new(server.url());
    let result = client.generate("prompt", &SamplingConfig::default()).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("not valid completion JSON"));
}

/// **Test: a connection-level failure surfaces as a request error.**
#[tokio::test]
async fn generate_propagates_connection_failure() {
    // Nothing listens on this port.
    let client = LlamaServerClient::new("http://127.0.0.1:19");
    let result = client.generate("prompt", &SamplingConfig::default()).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("request failed"));
}

/// **Test: multi-line prompts survive JSON transport unchanged.**
#[tokio::test]
async fn generate_passes_prompt_through_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/completion")
        .match_body(Matcher::PartialJsonString(
            r#"{"prompt": "line one\nline \"two\"\n"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": "ok"}"#)
        .create_async()
        .await;

    let client = LlamaServerClient::new(server.url());
    client
        .generate("line one\nline \"two\"\n", &SamplingConfig::default())
        .await
        .unwrap();

    mock.assert_async().await;
}
