//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the error latch
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Word lexing and keyword classification
//! - `number` - Integer and real literal lexing
//! - `operator` - Punctuation and digraph lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{Lexer, LexerOptions};
pub use operator::single_symbol;
