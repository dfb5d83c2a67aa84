//! Error types for the relay core.

use thiserror::Error;

/// Errors surfaced at the relay's seams. Transport-internal retry and
/// rate-limit handling stay inside teloxide and never reach this type.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Outbound send or chat action failed at the messaging transport.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The text-generation pipeline failed or returned garbage.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Invalid or missing configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem problems (log file handling).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the relay crates.
pub type Result<T> = std::result::Result<T, RelayError>;
