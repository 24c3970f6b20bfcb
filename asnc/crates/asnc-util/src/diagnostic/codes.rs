//! Stable codes attached to diagnostics.
//!
//! Codes are grouped by phase: `E1xxx` belongs to the lexer. A code never
//! changes meaning once published, so tools and tests can match on it.
//!
//! # Examples
//!
//! ```
//! use asnc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A diagnostic code such as `E1001`: a one-letter prefix and a number
/// printed with at least four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The printed form, e.g. `E1001`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer, E1001-E1999.

    /// A character that cannot start any token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// A word ending in a hyphen or containing `--`.
    pub const E_LEXER_INVALID_IDENTIFIER: Self = Self::new("E", 1002);
    /// An integer that overflows 64 bits, or an exponent with no digits.
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// The byte source failed or held invalid UTF-8.
    pub const E_LEXER_UNREADABLE_INPUT: Self = Self::new("E", 1004);
    /// End of input inside a block comment (strict comment mode only).
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}{:04})", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
pub const E_LEXER_INVALID_IDENTIFIER: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_IDENTIFIER;
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_NUMBER;
pub const E_LEXER_UNREADABLE_INPUT: DiagnosticCode = DiagnosticCode::E_LEXER_UNREADABLE_INPUT;
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
