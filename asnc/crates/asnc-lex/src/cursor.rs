//! Rune cursor over a UTF-8 byte stream.
//!
//! This module provides the [`Cursor`] struct, which decodes code points from
//! any [`BufRead`] source on demand and offers the small set of operations the
//! lexer needs: consume one rune, push the last one back, peek one or several
//! runes ahead, and discard runes that were already peeked.
//!
//! Decoded runes are queued, so peeking and reading see the same code points
//! and every byte is decoded exactly once. An invalid byte sequence is a read
//! error, never a replacement character.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{LexError, LexResult};

/// A position in the source: byte offset, 1-based line and column.
///
/// Lines are counted on LF; columns count code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Location {
    /// The location of the first byte of the input.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };

    fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

/// A cursor for traversing a byte stream rune by rune.
///
/// # Example
///
/// ```
/// use asnc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::from_source("::= x");
/// assert_eq!(cursor.peek_n(3), "::=");
/// cursor.discard(3).unwrap();
/// assert_eq!(cursor.read().unwrap(), Some(' '));
/// cursor.unread();
/// assert_eq!(cursor.peek(), Some(' '));
/// ```
pub struct Cursor<R> {
    /// The byte source.
    reader: R,

    /// Runes decoded but not yet consumed.
    lookahead: VecDeque<char>,

    /// A decode error found while filling the lookahead; surfaced by `read`.
    pending: Option<LexError>,

    /// The most recently read rune and the location before it.
    last: Option<(char, Location)>,

    /// Set once the byte source has reported end of input.
    exhausted: bool,

    /// Location of the next rune to be read.
    location: Location,

    /// Byte offset of the next undecoded byte.
    decoded: usize,
}

impl<'a> Cursor<&'a [u8]> {
    /// Creates a cursor over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        Cursor::new(source.as_bytes())
    }
}

impl<R: BufRead> Cursor<R> {
    /// Creates a new cursor reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lookahead: VecDeque::with_capacity(4),
            pending: None,
            last: None,
            exhausted: false,
            location: Location::START,
            decoded: 0,
        }
    }

    /// Consumes and returns the next rune.
    ///
    /// Returns `Ok(None)` at end of input. A decode or I/O failure is
    /// returned as an error, and the same error is returned by every later
    /// call once the lookahead is drained.
    pub fn read(&mut self) -> LexResult<Option<char>> {
        let next = match self.lookahead.pop_front() {
            Some(c) => Some(c),
            None => self.decode_fresh()?,
        };
        if let Some(c) = next {
            self.last = Some((c, self.location));
            self.location.advance(c);
        }
        Ok(next)
    }

    /// Pushes the most recently read rune back onto the input.
    ///
    /// # Panics
    ///
    /// Panics if no rune has been read since the last `unread` or `discard`.
    /// Only one rune of pushback is supported.
    pub fn unread(&mut self) {
        let Some((c, location)) = self.last.take() else {
            panic!("Cursor::unread called without a preceding read");
        };
        self.lookahead.push_front(c);
        self.location = location;
    }

    /// Returns the next rune without consuming it.
    ///
    /// Returns `None` at end of input or in front of an undecodable byte.
    pub fn peek(&mut self) -> Option<char> {
        self.fill(1);
        self.lookahead.front().copied()
    }

    /// Returns up to `n` upcoming runes without consuming them.
    ///
    /// The result is shorter than `n` when end of input or an undecodable
    /// byte comes first.
    ///
    /// ```
    /// use asnc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::from_source("ab");
    /// assert_eq!(cursor.peek_n(2), "ab");
    /// assert_eq!(cursor.peek_n(5), "ab");
    /// ```
    pub fn peek_n(&mut self, n: usize) -> String {
        self.fill(n);
        self.lookahead.iter().take(n).collect()
    }

    /// Consumes `n` runes, normally ones just seen through [`peek_n`](Self::peek_n).
    ///
    /// Stops early at end of input. Pushback is not available afterwards.
    pub fn discard(&mut self, n: usize) -> LexResult<()> {
        for _ in 0..n {
            if self.read()?.is_none() {
                break;
            }
        }
        self.last = None;
        Ok(())
    }

    /// Location of the next rune to be read.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns true once every rune has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.fill(1);
        self.lookahead.is_empty() && self.exhausted
    }

    /// Decodes runes until the lookahead holds `n` of them, the input ends,
    /// or a decode error is recorded.
    fn fill(&mut self, n: usize) {
        while self.lookahead.len() < n && !self.exhausted && self.pending.is_none() {
            match self.decode_next() {
                Ok(Some(c)) => self.lookahead.push_back(c),
                Ok(None) => self.exhausted = true,
                Err(err) => self.pending = Some(err),
            }
        }
    }

    /// Produces the next rune when the lookahead is empty.
    fn decode_fresh(&mut self) -> LexResult<Option<char>> {
        if let Some(err) = &self.pending {
            return Err(err.clone());
        }
        if self.exhausted {
            return Ok(None);
        }
        match self.decode_next() {
            Ok(None) => {
                self.exhausted = true;
                Ok(None)
            },
            Ok(some) => Ok(some),
            Err(err) => {
                self.pending = Some(err.clone());
                Err(err)
            },
        }
    }

    /// Decodes one code point straight from the byte source.
    ///
    /// A sequence split across two buffer fills is reassembled.
    fn decode_next(&mut self) -> LexResult<Option<char>> {
        let mut bytes = [0u8; 4];
        let mut len = 0;
        let mut width = 1;

        while len < width {
            let buf = self
                .reader
                .fill_buf()
                .map_err(|e| LexError::Read(e.to_string()))?;
            if buf.is_empty() {
                if len == 0 {
                    return Ok(None);
                }
                return Err(LexError::InvalidUtf8 {
                    offset: self.decoded,
                });
            }
            if len == 0 {
                width = utf8_width(buf[0]).ok_or(LexError::InvalidUtf8 {
                    offset: self.decoded,
                })?;
            }
            let take = (width - len).min(buf.len());
            bytes[len..len + take].copy_from_slice(&buf[..take]);
            self.reader.consume(take);
            len += take;
        }

        let c = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(LexError::InvalidUtf8 {
                offset: self.decoded,
            })?;
        self.decoded += width;
        Ok(Some(c))
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or `None` if `lead`
/// cannot start a sequence.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
