//! Error type for the phrasematch CLI.

use phrasematch_core::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reference sentences could not be compiled
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the CLI error.
pub type Result<T> = std::result::Result<T, Error>;
