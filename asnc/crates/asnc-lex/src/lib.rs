//! asnc-lex - Lexical Analyzer for ASN.1 Module Definitions
//!
//! This crate turns ASN.1 notation (X.680) into a stream of tokens for a
//! grammar-driven parser. It reads any UTF-8 byte stream, skips whitespace
//! and comments, and classifies what remains into reserved words,
//! references, identifiers, numeric literals and punctuation.
//!
//! # Example Usage
//!
//! ```
//! use asnc_lex::{Keyword, Lexer, Token};
//! use asnc_util::Handler;
//!
//! let source = "Version ::= INTEGER { v1(0) } -- default v1";
//! let handler = Handler::new();
//! let mut lexer = Lexer::from_source(source, &handler);
//!
//! assert_eq!(lexer.next_token(), Ok(Token::TypeOrModuleReference("Version".into())));
//! assert_eq!(lexer.next_token(), Ok(Token::Assignment));
//! assert_eq!(lexer.next_token(), Ok(Token::Keyword(Keyword::Integer)));
//!
//! // Or collect the rest
//! let rest = lexer.tokenize().unwrap();
//! assert_eq!(rest.len(), 6);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, keyword and literal types
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Rune cursor over a byte stream
//! - [`unicode`] - Character classes
//! - [`protocol`] - Integer-code interface for yacc-style parsers
//! - [`error`] - Lexical error type
//!
//! # Token Categories
//!
//! ## Words
//!
//! A word starts with a letter and continues with letters, digits and single
//! hyphens. It may not end with a hyphen.
//!
//! - **Reserved words**: 80 fixed spellings such as `SEQUENCE`,
//!   `MINUS-INFINITY`, `UTF8String`
//! - **Type or module references**: any other word starting with an
//!   uppercase letter
//! - **Value identifiers**: words starting with a lowercase letter
//!
//! ## Literals
//!
//! - **Number**: `42`, `-17`
//! - **Real**: `3.14`, `2E10`, `1.5e-3`, `5.`
//!
//! ## Punctuation
//!
//! - **Digraphs**: `::=`, `...`, `..`, `[[`, `]]`
//! - **Single**: `{ } < > , . ( ) [ ] - : = " ' ; @ | ! ^`
//!
//! ## Comments
//!
//! - **Line**: `--` up to a newline or the next `--`
//! - **Block**: `/* ... */`, nesting allowed

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod protocol;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Location};
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, LexerOptions};
pub use protocol::SymType;
pub use token::{keyword_from_ident, Keyword, Number, Real, Token};
