//! Tokens command implementation.
//!
//! Lexes one file and prints every token with its location, kind and
//! spelling, as text or as JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use asnc_lex::{LexError, Lexer, LexerOptions, Token};
use asnc_util::{Handler, Span};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{read_source, render_diagnostics, source_text};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to lex.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer options.
    pub options: LexerOptions,
}

/// One printed token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based).
    pub column: u32,
    /// Terminal name, e.g. `VALUEIDENTIFIER`.
    pub kind: &'static str,
    /// Parser protocol code.
    pub code: i32,
    /// Spelling as it appears in the source.
    pub text: String,
    /// Numeric value of a literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl TokenRecord {
    /// Builds the record for `token` found at `span`.
    pub fn new(token: &Token, span: Span) -> Self {
        let value = match token {
            Token::Number(n) => Some(serde_json::Value::from(n.value)),
            Token::RealNumber(r) => Some(serde_json::Value::from(r.value)),
            _ => None,
        };
        Self {
            line: span.line,
            column: span.column,
            kind: token.name(),
            code: token.code(),
            text: token.to_string(),
            value,
        }
    }
}

/// A lexical failure together with its rendered diagnostic.
#[derive(Debug)]
struct Failure {
    error: LexError,
    rendered: String,
}

/// Lexes the input and collects records up to end of input or the first
/// error.
fn collect_records(args: &TokensArgs, bytes: &[u8]) -> (Vec<TokenRecord>, Option<Failure>) {
    let handler = Handler::new();
    let mut lexer = Lexer::with_options(bytes, &handler, args.options);
    let mut records = Vec::new();

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => records.push(TokenRecord::new(&token, lexer.token_span())),
            Err(error) => {
                let text = source_text(bytes);
                let rendered = render_diagnostics(&args.file, &text, &handler);
                return (records, Some(Failure { error, rendered }));
            },
        }
    }
    (records, None)
}

/// Writes records in the requested format.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[TokenRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(
                    out,
                    "{}:{}\t{}\t{}",
                    record.line, record.column, record.kind, record.text
                )?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Run the tokens command.
///
/// Tokens read before a lexical error are still printed; the rendered
/// diagnostic goes to stderr and the error is returned.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let bytes = read_source(&args.file)?;
    let (records, failure) = collect_records(&args, &bytes);
    debug!(
        "lexed {} token(s) from {}",
        records.len(),
        args.file.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &records, args.format)?;
    out.flush()?;

    match failure {
        Some(failure) => {
            eprintln!("{}", failure.rendered);
            Err(failure.error.into())
        },
        None => Ok(()),
    }
}
