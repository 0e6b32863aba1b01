//! Error types for daybook-core

use thiserror::Error;

/// Main error type for the daybook-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type alias for daybook-core
pub type Result<T> = std::result::Result<T, Error>;
