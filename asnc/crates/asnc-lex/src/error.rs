//! Lexical error types.
//!
//! Every failure the lexer can report is a [`LexError`]. The lexer keeps the
//! first one it produces and hands it back on every later call.

use asnc_util::DiagnosticCode;
use thiserror::Error;

/// An error produced while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The underlying byte source failed.
    #[error("failed to read: {0}")]
    Read(String),

    /// The byte source does not hold valid UTF-8 at `offset`.
    #[error("failed to read: invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first byte of the bad sequence.
        offset: usize,
    },

    /// A word ended with a hyphen.
    #[error("token can not end on hyphen, got {word}")]
    TrailingHyphen {
        /// The word as read, including the final hyphen.
        word: String,
    },

    /// A word contained two hyphens in a row.
    #[error("token can not contain two hyphens in a row, got {word}")]
    DoubleHyphen {
        /// The word read up to and including the second hyphen.
        word: String,
    },

    /// An integer literal does not fit in an `i64`.
    #[error("failed to parse number: {text} does not fit in a 64-bit integer")]
    NumberOverflow {
        /// The literal text, sign included.
        text: String,
    },

    /// An exponent marker was not followed by any digit.
    #[error("expected exponent after '{text}', got {}", describe(.found))]
    MalformedExponent {
        /// Everything consumed so far, exponent marker and sign included.
        text: String,
        /// The character found where a digit was expected.
        found: Option<char>,
    },

    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// End of input inside a block comment, in strict comment mode.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::Read(_) | LexError::InvalidUtf8 { .. } => {
                DiagnosticCode::E_LEXER_UNREADABLE_INPUT
            },
            LexError::TrailingHyphen { .. } | LexError::DoubleHyphen { .. } => {
                DiagnosticCode::E_LEXER_INVALID_IDENTIFIER
            },
            LexError::NumberOverflow { .. } | LexError::MalformedExponent { .. } => {
                DiagnosticCode::E_LEXER_INVALID_NUMBER
            },
            LexError::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// Whether the byte source itself is unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LexError::Read(_) | LexError::InvalidUtf8 { .. })
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
