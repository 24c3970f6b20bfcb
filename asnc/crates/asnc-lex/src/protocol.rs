//! Integer-code interface for yacc-style parsers.
//!
//! Generated LALR parsers pull tokens through a `lex(lval) -> int` call: the
//! return value is the token kind and the payload is written into a record
//! the parser owns. [`Lexer::lex`] provides that shape on top of
//! [`Lexer::next_token`].

use std::io::BufRead;

use crate::token::Token;
use crate::Lexer;

/// Code returned at end of input.
pub const EOF_CODE: i32 = 0;

/// Code returned once a lexical error has happened.
pub const ERROR_CODE: i32 = -1;

/// Semantic value record filled in by [`Lexer::lex`].
///
/// Fields not touched by the current token keep their previous values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymType {
    /// Identifier or reference text.
    pub name: String,
    /// Integer literal value.
    pub number: i64,
    /// Exact spelling of the last integer or real literal.
    pub number_repr: String,
    /// Real literal value.
    pub real: f64,
}

impl<R: BufRead> Lexer<'_, R> {
    /// Produces the next token as a parser code, writing its payload into
    /// `lval`.
    ///
    /// Returns [`EOF_CODE`] at end of input and [`ERROR_CODE`] on error; the
    /// message is then available from [`Lexer::error_message`].
    ///
    /// # Example
    ///
    /// ```
    /// use asnc_lex::protocol::{SymType, EOF_CODE, ERROR_CODE};
    /// use asnc_lex::Lexer;
    /// use asnc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut lexer = Lexer::from_source("size 10 #", &handler);
    /// let mut lval = SymType::default();
    ///
    /// assert_eq!(lexer.lex(&mut lval), 101);
    /// assert_eq!(lval.name, "size");
    /// assert_eq!(lexer.lex(&mut lval), 102);
    /// assert_eq!(lval.number, 10);
    /// assert_eq!(lexer.lex(&mut lval), ERROR_CODE);
    /// assert_eq!(lexer.error_message().as_deref(), Some("unexpected character '#'"));
    /// ```
    pub fn lex(&mut self, lval: &mut SymType) -> i32 {
        let token = match self.next_token() {
            Ok(token) => token,
            Err(_) => return ERROR_CODE,
        };
        let code = token.code();
        match token {
            Token::TypeOrModuleReference(name) | Token::ValueIdentifier(name) => {
                lval.name = name;
            },
            Token::Number(number) => {
                lval.number = number.value;
                lval.number_repr = number.text;
            },
            Token::RealNumber(real) => {
                lval.real = real.value;
                lval.number_repr = real.text;
            },
            _ => {},
        }
        code
    }
}
