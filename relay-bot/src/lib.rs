//! # relay-bot
//!
//! Telegram front end for a local text-generation server. One message in,
//! one generated reply out; the relay keeps no state between turns.
//!
//! Public surface: [`run_bot`] plus the pieces integration tests assemble by
//! hand ([`BotConfig`], [`build_handler_chain_with`], the handlers).

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{
    build_components, build_handler_chain, build_handler_chain_with, BotComponents,
};
pub use config::BotConfig;
pub use handlers::{RelayHandler, StartHandler, START_GREETING};
pub use runner::{run_bot, run_repl, turn_from_message};
