//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and the
//! first-error latch.

use std::io::BufRead;

use asnc_util::{Handler, Span};
use tracing::{debug, trace};

use crate::cursor::{Cursor, Location};
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::unicode;

/// Knobs that change how the lexer treats borderline input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Report end of input inside a block comment as an error instead of
    /// treating the comment as closed.
    pub strict_comments: bool,
}

/// Lexer for ASN.1 module definitions.
///
/// The lexer turns a UTF-8 byte stream into [`Token`]s, one per call to
/// [`next_token`](Lexer::next_token). The first lexical error is latched:
/// it is reported once to the [`Handler`] and returned again by every later
/// call.
///
/// # Example
///
/// ```
/// use asnc_lex::{Keyword, Lexer, Token};
/// use asnc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::from_source("Foo ::= INTEGER", &handler);
///
/// assert_eq!(lexer.next_token(), Ok(Token::TypeOrModuleReference("Foo".into())));
/// assert_eq!(lexer.next_token(), Ok(Token::Assignment));
/// assert_eq!(lexer.next_token(), Ok(Token::Keyword(Keyword::Integer)));
/// assert_eq!(lexer.next_token(), Ok(Token::Eof));
/// ```
pub struct Lexer<'h, R> {
    /// Rune cursor over the input.
    pub(crate) cursor: Cursor<R>,

    /// Diagnostic sink for the latched error.
    handler: &'h Handler,

    /// Behavior switches.
    pub(crate) options: LexerOptions,

    /// Where the current token (or comment) started.
    pub(crate) token_start: Location,

    /// Span of the most recent token or error.
    token_span: Span,

    /// The first error, once one has happened.
    error: Option<LexError>,

    /// Whether the byte order mark has been checked.
    pub(crate) bom_checked: bool,

    /// Set after `Eof` has been returned.
    finished: bool,
}

impl<'h, 'a> Lexer<'h, &'a [u8]> {
    /// Creates a lexer over in-memory source text.
    pub fn from_source(source: &'a str, handler: &'h Handler) -> Self {
        Lexer::new(source.as_bytes(), handler)
    }
}

impl<'h, R: BufRead> Lexer<'h, R> {
    /// Creates a new lexer reading from `reader` with default options.
    pub fn new(reader: R, handler: &'h Handler) -> Self {
        Self::with_options(reader, handler, LexerOptions::default())
    }

    /// Creates a new lexer with explicit options.
    pub fn with_options(reader: R, handler: &'h Handler, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(reader),
            handler,
            options,
            token_start: Location::START,
            token_span: Span::DUMMY,
            error: None,
            bom_checked: false,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Skips whitespace and comments, then dispatches on the first rune.
    /// Returns `Ok(Token::Eof)` at end of input and on every call after that.
    /// Once an error has been returned, the same error is returned forever.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.finished {
            return Ok(Token::Eof);
        }

        match self.scan_token() {
            Ok(token) => {
                self.token_span = self.span_from_start();
                if token.is_eof() {
                    self.finished = true;
                }
                trace!(
                    kind = token.name(),
                    line = self.token_span.line,
                    column = self.token_span.column,
                    "token {}",
                    token
                );
                Ok(token)
            },
            Err(err) => Err(self.latch(err)),
        }
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        self.skip_trivia()?;
        self.token_start = self.cursor.location();

        let Some(c) = self.cursor.read()? else {
            return Ok(Token::Eof);
        };

        if c.is_ascii_digit() {
            self.cursor.unread();
            return self.lex_number(false);
        }
        if c == '-' && self.cursor.peek().is_some_and(|next| next.is_ascii_digit()) {
            return self.lex_number(true);
        }
        if unicode::is_word_start(c) {
            return self.lex_word(c);
        }
        self.lex_symbol(c)
    }

    /// Records the first error and reports it to the handler.
    fn latch(&mut self, err: LexError) -> LexError {
        let span = self.span_from_start();
        self.token_span = span;
        debug!(
            line = span.line,
            column = span.column,
            code = %err.code(),
            "lexical error latched: {}",
            err
        );
        self.handler
            .build_error(span, err.to_string())
            .code(err.code())
            .emit(self.handler);
        self.error = Some(err.clone());
        err
    }

    fn span_from_start(&self) -> Span {
        let end = self.cursor.location();
        Span::new(
            self.token_start.offset,
            end.offset,
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Lexes the whole input.
    ///
    /// Returns every token before `Eof`, or the first error.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }

    /// The latched error, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Message of the latched error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Span of the most recent token, or of the error once one is latched.
    pub fn token_span(&self) -> Span {
        self.token_span
    }

    /// The options this lexer was built with.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.location().line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.location().column
    }
}

impl<R: BufRead> Iterator for Lexer<'_, R> {
    type Item = LexResult<Token>;

    /// Yields tokens up to, not including, `Eof`; the first error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.error.is_some() {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => None,
            other => Some(other),
        }
    }
}
