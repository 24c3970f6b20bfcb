//! asnc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared building blocks for the asnc ASN.1 compiler front end:
//!
//! - [`span`] - byte-offset plus line/column source locations
//! - [`diagnostic`] - error collection (`Handler`), the fluent
//!   `DiagnosticBuilder`, diagnostic codes, and source snippet rendering
//! - [`error`] - error types for the utilities themselves
//!
//! Every phase reports problems through a [`Handler`]; the lexer emits one
//! diagnostic for the first lexical error it latches, and the `asnt` tool
//! renders the collected diagnostics against the original source text.
//
// DIAGNOSTIC FLOW:
// ----------------
// ```
//   asnc-lex ──LexError──> DiagnosticBuilder ──emit──> Handler
//                                                        │
//   asnt  <──────────── diagnostics() ───────────────────┘
//          └─ SourceSnippet::from_source(text, span).format()
// ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet,
};
pub use error::{SnippetError, SnippetResult};
pub use span::Span;

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send);
