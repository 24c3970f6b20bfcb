//! Errors surfaced by the asnt commands.
//!
//! `main` prints them as `error: <message>` and exits non-zero.

use asnc_lex::LexError;
use thiserror::Error;

/// Main error type for the asnt CLI application.
#[derive(Error, Debug)]
pub enum AsntError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when an input file does not lex.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// One or more files failed `asnt check`.
    #[error("{failed} of {total} file(s) failed to lex")]
    CheckFailed {
        /// Number of failing files.
        failed: usize,
        /// Number of files checked.
        total: usize,
    },

    /// Writing output or a config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AsntError.
pub type Result<T> = std::result::Result<T, AsntError>;
