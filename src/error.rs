//! Error types for trie_viz

use thiserror::Error;

/// Result type alias for trie_viz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the crate
///
/// Store mutations never fail; invalid inputs there are silent no-ops.
/// These variants cover parsing user input, configuration and logging setup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown trie variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}
