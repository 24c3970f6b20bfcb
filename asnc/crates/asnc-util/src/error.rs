//! Core error types for asnc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for extracting a source snippet from a span
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the source text
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        source_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span does not start on a character boundary
    #[error("Span start {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result type alias for snippet operations
pub type SnippetResult<T> = std::result::Result<T, SnippetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SnippetError::InvalidSpan { start: 5, end: 2 };
        assert_eq!(err.to_string(), "Invalid span: start 5 > end 2");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SnippetError::SpanOutOfBounds {
            source_len: 3,
            span_start: 4,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: source has 3 bytes, span is 4..9"
        );
    }
}
