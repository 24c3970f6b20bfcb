//! Comment lexing.
//!
//! This module handles skipping whitespace, `--` line comments and nested
//! `/* */` block comments.

use std::io::BufRead;

use tracing::trace;

use crate::error::{LexError, LexResult};
use crate::unicode::{is_newline, is_whitespace};
use crate::Lexer;

impl<R: BufRead> Lexer<'_, R> {
    /// Skips whitespace and comments.
    ///
    /// A byte order mark at the very start of input is skipped as well.
    /// This is called before lexing each token.
    pub(crate) fn skip_trivia(&mut self) -> LexResult<()> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.peek() == Some('\u{FEFF}') {
                self.cursor.discard(1)?;
            }
        }

        while let Some(c) = self.cursor.peek() {
            if is_whitespace(c) {
                self.cursor.discard(1)?;
                continue;
            }
            match self.cursor.peek_n(2).as_str() {
                "--" => {
                    self.token_start = self.cursor.location();
                    self.skip_line_comment()?;
                },
                "/*" => {
                    self.token_start = self.cursor.location();
                    self.skip_block_comment()?;
                },
                _ => break,
            }
        }
        Ok(())
    }

    /// Skips a line comment.
    ///
    /// The comment ends after a newline, after the next `--`, or at end of
    /// input.
    fn skip_line_comment(&mut self) -> LexResult<()> {
        self.cursor.discard(2)?;

        loop {
            match self.cursor.read()? {
                None => break,
                Some(c) if is_newline(c) => break,
                Some('-') if self.cursor.peek() == Some('-') => {
                    self.cursor.discard(1)?;
                    break;
                },
                Some(_) => {},
            }
        }
        trace!(line = self.token_start.line, "skipped line comment");
        Ok(())
    }

    /// Skips a block comment.
    ///
    /// Handles nested block comments with a depth counter.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        self.cursor.discard(2)?;
        let mut depth = 1usize;

        while depth > 0 {
            match self.cursor.read()? {
                None => {
                    if self.options.strict_comments {
                        return Err(LexError::UnterminatedComment);
                    }
                    trace!(depth, "block comment closed by end of input");
                    return Ok(());
                },
                Some('/') if self.cursor.peek() == Some('*') => {
                    self.cursor.discard(1)?;
                    depth += 1;
                },
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.discard(1)?;
                    depth -= 1;
                },
                Some(_) => {},
            }
        }
        trace!(line = self.token_start.line, "skipped block comment");
        Ok(())
    }
}
