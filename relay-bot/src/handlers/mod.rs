//! Relay handlers: the /start greeting and the text relay itself.

mod relay;
mod start;

pub use relay::RelayHandler;
pub use start::{StartHandler, START_GREETING};
