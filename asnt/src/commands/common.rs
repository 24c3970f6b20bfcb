//! Common utilities for asnt commands.
//!
//! Reading input files and turning the lexer's diagnostics into the text
//! printed on stderr.

use std::borrow::Cow;
use std::path::Path;

use asnc_util::{Diagnostic, DiagnosticCode, Handler, SourceSnippet};

use crate::error::{AsntError, Result};

/// Reads an input file as raw bytes.
///
/// The bytes are handed to the lexer unchanged so that invalid UTF-8 is
/// reported as a lexical error with a location.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| AsntError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Source text for snippets. Invalid sequences become U+FFFD, which only
/// shifts offsets after the first bad byte.
pub fn source_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Renders every diagnostic in `handler`, each prefixed by `path` and
/// followed by the offending source line when it can be located.
pub fn render_diagnostics(path: &Path, source: &str, handler: &Handler) -> String {
    handler
        .diagnostics()
        .into_iter()
        .map(|diagnostic| render_diagnostic(path, source, diagnostic))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_diagnostic(path: &Path, source: &str, diagnostic: Diagnostic) -> String {
    let mut diagnostic = match SourceSnippet::from_source(source, diagnostic.span) {
        Ok(snippet) => {
            let label = snippet_label(diagnostic.code);
            diagnostic.with_snippet(snippet.with_label(label))
        },
        Err(_) => diagnostic,
    };
    if let Some(help) = diagnostic.code.and_then(help_for) {
        diagnostic = diagnostic.with_help(help);
    }
    format!("{}: {}", path.display(), diagnostic)
}

fn snippet_label(code: Option<DiagnosticCode>) -> &'static str {
    match code {
        Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT) => "comment starts here",
        _ => "here",
    }
}

fn help_for(code: DiagnosticCode) -> Option<&'static str> {
    match code {
        DiagnosticCode::E_LEXER_INVALID_IDENTIFIER => {
            Some("identifiers may not end with a hyphen or contain two hyphens in a row")
        },
        DiagnosticCode::E_LEXER_INVALID_NUMBER => {
            Some("integers must fit in 64 bits and an exponent needs at least one digit")
        },
        DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT => Some("close the comment with `*/`"),
        DiagnosticCode::E_LEXER_UNREADABLE_INPUT => Some("the file must be UTF-8 encoded"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asnc_lex::Lexer;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn diagnostics_for(source: &str) -> String {
        let handler = Handler::new();
        let _ = Lexer::from_source(source, &handler).tokenize();
        render_diagnostics(&PathBuf::from("m.asn"), source, &handler)
    }

    #[test]
    fn test_render_unexpected_char() {
        let rendered = diagnostics_for("A ::= {\n  b # }");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "m.asn: error[E1001]: unexpected character '#'");
        assert_eq!(lines[1], "  --> 2:5");
        assert_eq!(lines[2], "  2 |   b # }");
        assert_eq!(lines[3], "    |     ^ here");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_invalid_identifier_has_help() {
        let rendered = diagnostics_for("foo-");
        assert!(rendered.contains("error[E1002]"));
        assert!(rendered.contains("^^^^ here"));
        assert!(rendered.contains("= help: identifiers may not end with a hyphen"));
    }

    #[test]
    fn test_render_lone_cr_header_matches_snippet() {
        let rendered = diagnostics_for("a\rb\r#");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "  --> 1:5");
        assert_eq!(lines[2], "  1 | a b #");
        assert_eq!(lines[3], "    |     ^ here");
    }

    #[test]
    fn test_render_nothing_without_errors() {
        assert_eq!(diagnostics_for("A ::= B"), "");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_source(&dir.path().join("missing.asn")).unwrap_err();
        assert!(matches!(err, AsntError::FileOperation(_)));
    }

    #[test]
    fn test_source_text_lossy() {
        assert_eq!(source_text(b"ab"), "ab");
        assert_eq!(source_text(b"a\xFF"), "a\u{FFFD}");
    }
}
