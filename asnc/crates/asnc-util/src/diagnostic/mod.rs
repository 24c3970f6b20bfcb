//! Diagnostics reported by the front end.
//!
//! A [`Diagnostic`] pairs a message with the span it is about, an optional
//! [`DiagnosticCode`], help lines and source snippets. Phases report them to a
//! [`Handler`], which the driver drains and renders once the phase is done.
//!
//! # Examples
//!
//! ```
//! use asnc_util::diagnostic::{DiagnosticCode, Handler};
//! use asnc_util::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::new(4, 5, 1, 5), "unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_INVALID_IDENTIFIER, E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR,
    E_LEXER_UNREADABLE_INPUT, E_LEXER_UNTERMINATED_COMMENT,
};

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// One reported error. Lexical problems always reject the input, so there
/// is no severity beyond "error".
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    /// Where the problem is; [`Span::DUMMY`] when it has no location.
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    /// Suggestions, each printed as `= help: ...`.
    pub helps: Vec<String>,
    /// Source excerpts printed under the header.
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Renders `error[E1001]: message`, then ` --> line:col`, the snippets and
/// the help lines, each on its own line.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        if self.span != Span::DUMMY {
            write!(f, "\n  --> {}", self.span)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics for one compilation unit.
///
/// Reporting goes through `&self`, so a lexer can hold a shared reference
/// while the caller still reads the results afterwards. A handler is not
/// `Sync`; parallel drivers give each worker its own.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Starts an error at `span`; finish it with [`DiagnosticBuilder::emit`].
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// A copy of everything reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
