//! Punctuation lexing.
//!
//! This module handles single-character punctuation and the digraphs `::=`,
//! `...`, `..`, `[[` and `]]`.

use std::io::BufRead;

use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Lexer;

impl<R: BufRead> Lexer<'_, R> {
    /// Lexes punctuation starting with the already-read rune `c`.
    ///
    /// Digraphs are checked first; anything that is neither a digraph nor a
    /// known single symbol is an `UnexpectedChar` error.
    pub(crate) fn lex_symbol(&mut self, c: char) -> LexResult<Token> {
        let token = match c {
            ':' if self.cursor.peek_n(2) == ":=" => {
                self.cursor.discard(2)?;
                Token::Assignment
            },
            '.' if self.cursor.peek_n(2) == ".." => {
                self.cursor.discard(2)?;
                Token::Ellipsis
            },
            '.' if self.cursor.peek() == Some('.') => {
                self.cursor.discard(1)?;
                Token::RangeSeparator
            },
            '[' if self.cursor.peek() == Some('[') => {
                self.cursor.discard(1)?;
                Token::LeftVersionBrackets
            },
            ']' if self.cursor.peek() == Some(']') => {
                self.cursor.discard(1)?;
                Token::RightVersionBrackets
            },
            c => single_symbol(c).ok_or(LexError::UnexpectedChar(c))?,
        };
        Ok(token)
    }
}

/// Maps a single punctuation character to its token.
///
/// # Example
///
/// ```
/// use asnc_lex::lexer::single_symbol;
/// use asnc_lex::Token;
///
/// assert_eq!(single_symbol('{'), Some(Token::OpenCurly));
/// assert_eq!(single_symbol('#'), None);
/// ```
pub fn single_symbol(c: char) -> Option<Token> {
    let token = match c {
        '{' => Token::OpenCurly,
        '}' => Token::CloseCurly,
        '<' => Token::Less,
        '>' => Token::Greater,
        ',' => Token::Comma,
        '.' => Token::Dot,
        '(' => Token::OpenRound,
        ')' => Token::CloseRound,
        '[' => Token::OpenSquare,
        ']' => Token::CloseSquare,
        '-' => Token::Minus,
        ':' => Token::Colon,
        '=' => Token::Equals,
        '"' => Token::QuotationMark,
        '\'' => Token::Apostrophe,
        ' ' => Token::Space,
        ';' => Token::Semicolon,
        '@' => Token::At,
        '|' => Token::Pipe,
        '!' => Token::Exclamation,
        '^' => Token::Caret,
        _ => return None,
    };
    Some(token)
}
