//! # Chat Template
//!
//! Fixed single-turn framing for TinyLlama-style chat models, plus the pure
//! text split that recovers the assistant reply from raw pipeline output.
//!
//! ## Format
//!
//! One user turn is framed as:
//!
//! ```text
//! <|user|>
//! {user_text}</s>
//! <|assistant|>
//! ```
//!
//! The pipeline continues the text after the assistant token. Some backends
//! echo the whole prompt in front of the continuation, others return only the
//! continuation; [`extract_reply`] handles both shapes.
//!
//! ## Usage
//!
//! ```
//! use chat_template::{extract_reply, wrap_prompt};
//!
//! let prompt = wrap_prompt("What do cats eat?");
//! assert_eq!(prompt, "<|user|>\nWhat do cats eat?</s>\n<|assistant|>\n");
//!
//! let generated = format!("{}Cats eat fish and meat.", prompt);
//! assert_eq!(extract_reply(&generated), "Cats eat fish and meat.");
//! ```
//!
//! Everything here is pure string handling; transport and sampling concerns
//! live in other crates.

/// Token opening the user turn.
pub const USER_TOKEN: &str = "<|user|>";

/// Token opening the assistant turn.
pub const ASSISTANT_TOKEN: &str = "<|assistant|>";

/// End-of-turn marker closing the user message.
pub const END_OF_TURN: &str = "</s>";

/// Assistant delimiter exactly as it appears in pipeline output: the assistant
/// token plus the newline that follows it. Reply extraction splits on this
/// full sequence, so a bare `<|assistant|>` without the newline is not a turn
/// boundary.
pub const ASSISTANT_DELIMITER: &str = "<|assistant|>\n";

/// Frames `user_text` as a single chat turn awaiting the assistant reply.
///
/// The result always ends with [`ASSISTANT_DELIMITER`]; the model's job is to
/// continue from there.
pub fn wrap_prompt(user_text: &str) -> String {
    format!(
        "{}\n{}{}\n{}\n",
        USER_TOKEN, user_text, END_OF_TURN, ASSISTANT_TOKEN
    )
}

/// Returns the assistant reply: everything after the last occurrence of
/// [`ASSISTANT_DELIMITER`] in `generated`.
///
/// Splitting on the last occurrence keeps the reply correct even when the
/// model hallucinates further `<|user|>`/`<|assistant|>` rounds inside its
/// continuation. When the delimiter is absent the whole output is returned
/// unchanged; callers that care can detect that case with
/// [`has_assistant_turn`] and log it.
pub fn extract_reply(generated: &str) -> &str {
    match generated.rfind(ASSISTANT_DELIMITER) {
        Some(idx) => &generated[idx + ASSISTANT_DELIMITER.len()..],
        None => generated,
    }
}

/// True when `generated` carries [`ASSISTANT_DELIMITER`], i.e. when
/// [`extract_reply`] found a real turn boundary rather than falling back to
/// the whole output.
pub fn has_assistant_turn(generated: &str) -> bool {
    generated.contains(ASSISTANT_DELIMITER)
}
