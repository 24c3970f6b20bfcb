//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::error::{SnippetError, SnippetResult};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use asnc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("Foo ::= INTEGER #", 1, 17, 18, Some("here"));
/// assert!(snippet.format().contains("^ here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Extract the line a span starts on from the full source text.
    ///
    /// The highlighted range is clamped to the end of that line, so a span
    /// running over several lines (an unterminated comment, say) underlines
    /// only its first line.
    ///
    /// # Examples
    ///
    /// ```
    /// use asnc_util::{SourceSnippet, Span};
    ///
    /// let source = "A ::= 1\nB ::= #\n";
    /// let snippet = SourceSnippet::from_source(source, Span::new(14, 15, 2, 7)).unwrap();
    /// assert_eq!(snippet.line, "B ::= #");
    /// assert_eq!(snippet.start_column, 7);
    /// ```
    pub fn from_source(source: &str, span: Span) -> SnippetResult<Self> {
        if span.start > span.end {
            return Err(SnippetError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > source.len() {
            return Err(SnippetError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }
        if !source.is_char_boundary(span.start) {
            return Err(SnippetError::NotCharBoundary { offset: span.start });
        }

        let line_start = source[..span.start]
            .rfind(is_line_break)
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = source[span.start..]
            .find(is_line_break)
            .map(|i| span.start + i)
            .unwrap_or(source.len());
        let raw = &source[line_start..line_end];
        let line: String = raw
            .strip_suffix('\r')
            .unwrap_or(raw)
            .chars()
            .map(|c| if matches!(c, '\r' | '\u{0B}' | '\u{0C}') { ' ' } else { c })
            .collect();

        let start_column = source[line_start..span.start].chars().count() + 1;
        let highlighted_end = span.end.min(line_end);
        let width = source
            .get(span.start..highlighted_end)
            .map(|s| s.chars().count())
            .unwrap_or(0);

        Ok(Self {
            line,
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a gutter and a caret (^) line under the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Only LF ends a line, the same rule the lexer uses when counting lines.
/// A lone CR, VT or FF stays on its line and is shown as a space.
fn is_line_break(c: char) -> bool {
    c == '\n'
}

/// Fluent construction of a [`Diagnostic`].
///
/// # Examples
///
/// ```
/// use asnc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use asnc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '#'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .emit(&handler);
/// assert!(handler.has_errors());
/// ```
#[must_use = "a diagnostic is only reported by `emit`"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message, Span::DUMMY),
        }
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finishes the diagnostic and reports it.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}
