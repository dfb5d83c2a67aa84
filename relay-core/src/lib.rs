//! # relay-core
//!
//! Transport-agnostic core for the relay bot: the [`Turn`] and [`Chat`]
//! types, the [`Handler`] trait with its [`HandlerChain`], the outbound
//! [`Gateway`] trait with a Telegram implementation, error types, and
//! tracing setup.
//!
//! Nothing here knows about text generation; the relay handlers wire that in
//! from their own crate.

pub mod chain;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod types;

pub use chain::HandlerChain;
pub use error::{RelayError, Result};
pub use gateway::{Gateway, TelegramGateway};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Turn};
