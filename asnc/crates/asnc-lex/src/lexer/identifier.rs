//! Word lexing.
//!
//! This module handles references, identifiers and reserved words.

use std::io::BufRead;

use crate::error::{LexError, LexResult};
use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_identifier_char;
use crate::Lexer;

impl<R: BufRead> Lexer<'_, R> {
    /// Lexes a word whose first letter has already been read.
    ///
    /// Reads letters, digits and hyphens greedily and pushes the terminating
    /// rune back. A doubled hyphen is rejected as soon as it is read; a
    /// trailing hyphen is rejected once the word is complete.
    pub(crate) fn lex_word(&mut self, first: char) -> LexResult<Token> {
        let mut word = String::new();
        word.push(first);
        let mut after_hyphen = false;

        while let Some(c) = self.cursor.read()? {
            if !is_identifier_char(c) {
                self.cursor.unread();
                break;
            }
            word.push(c);
            if c == '-' {
                if after_hyphen {
                    return Err(LexError::DoubleHyphen { word });
                }
                after_hyphen = true;
            } else {
                after_hyphen = false;
            }
        }

        if after_hyphen {
            return Err(LexError::TrailingHyphen { word });
        }
        Ok(classify_word(first, word))
    }
}

/// Decides the token for a complete word from its first letter.
fn classify_word(first: char, word: String) -> Token {
    if !first.is_uppercase() {
        return Token::ValueIdentifier(word);
    }
    match keyword_from_ident(&word) {
        Some(keyword) => Token::Keyword(keyword),
        None => Token::TypeOrModuleReference(word),
    }
}
