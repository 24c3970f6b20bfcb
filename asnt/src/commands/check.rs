//! Check command implementation.
//!
//! Lexes many files, in parallel when more than one worker is allowed, and
//! reports every file that fails.

use std::path::{Path, PathBuf};

use asnc_lex::{Lexer, LexerOptions};
use asnc_util::Handler;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::commands::common::{read_source, render_diagnostics, source_text};
use crate::error::{AsntError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to lex.
    pub files: Vec<PathBuf>,
    /// Number of worker threads.
    pub jobs: usize,
    /// Lexer options.
    pub options: LexerOptions,
}

/// Outcome of lexing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file that was checked.
    pub path: PathBuf,
    /// Tokens read, up to the first error if there was one.
    pub tokens: usize,
    /// Rendered diagnostic when the file failed.
    pub failure: Option<String>,
}

impl FileReport {
    /// Whether the file lexed cleanly.
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Lexes a single file.
///
/// Each call owns its own handler and lexer, so calls are independent and
/// can run on any thread.
pub fn check_file(path: &Path, options: LexerOptions) -> FileReport {
    let bytes = match read_source(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return FileReport {
                path: path.to_path_buf(),
                tokens: 0,
                failure: Some(format!("{}: error: {}", path.display(), err)),
            };
        },
    };

    let handler = Handler::new();
    let mut lexer = Lexer::with_options(bytes.as_slice(), &handler, options);
    let mut tokens = 0;
    let mut failed = false;
    for item in &mut lexer {
        match item {
            Ok(_) => tokens += 1,
            Err(_) => failed = true,
        }
    }

    let failure = failed.then(|| render_diagnostics(path, &source_text(&bytes), &handler));
    debug!(
        path = %path.display(),
        tokens,
        ok = failure.is_none(),
        "checked file"
    );
    FileReport {
        path: path.to_path_buf(),
        tokens,
        failure,
    }
}

/// Lexes every file, keeping the input order in the result.
pub fn check_files(files: &[PathBuf], jobs: usize, options: LexerOptions) -> Vec<FileReport> {
    let sequential = || -> Vec<FileReport> {
        files.iter().map(|p| check_file(p, options)).collect()
    };
    if files.len() <= 1 || jobs <= 1 {
        return sequential();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| {
            files
                .par_iter()
                .map(|p| check_file(p, options))
                .collect()
        }),
        Err(e) => {
            warn!("failed to create thread pool ({e}), checking sequentially");
            sequential()
        },
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let reports = check_files(&args.files, args.jobs, args.options);

    for failure in reports.iter().filter_map(|r| r.failure.as_deref()) {
        eprintln!("{}", failure);
    }

    let total = reports.len();
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    let tokens: usize = reports.iter().map(|r| r.tokens).sum();
    println!(
        "checked {} file(s), {} token(s): {} ok, {} failed",
        total,
        tokens,
        total - failed,
        failed
    );

    if failed > 0 {
        return Err(AsntError::CheckFailed { failed, total });
    }
    Ok(())
}
