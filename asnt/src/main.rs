//! asnt - command-line driver for the asnc ASN.1 lexer.
//!
//! Parses arguments with clap, sets up logging and configuration, and
//! dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_config, run_tokens, CheckArgs, ConfigArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{AsntError, Result};

/// asnt - inspect how ASN.1 modules tokenize
///
/// Prints the token stream of a module, or checks that many modules lex
/// without errors.
#[derive(Parser, Debug)]
#[command(name = "asnt")]
#[command(author = "asnc developers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check ASN.1 modules", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ASNT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ASNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ASNT_NO_COLOR")]
    no_color: bool,

    /// Report an unterminated block comment as an error
    #[arg(long, global = true)]
    strict_comments: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the asnt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a module
    ///
    /// Tokens read before a lexical error are printed, then the error is
    /// reported and the command fails.
    Tokens(TokensCommand),

    /// Check that modules lex cleanly
    ///
    /// Lexes every file, in parallel, and reports each failure.
    Check(CheckCommand),

    /// Show or write the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Module to tokenize
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Modules to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(long)]
    write: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configuration may turn on verbose logging, so it is read first.
    let mut config = load_config(cli.config.as_deref())?;
    if cli.strict_comments {
        config.lexer.strict_comments = true;
    }

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token dumps on stdout stay machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AsntError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    let options = config.lexer_options();
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            file: args.file,
            format: args.format.unwrap_or(config.format),
            options,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            files: args.files,
            jobs: args.jobs.map_or(config.check.jobs, usize::from),
            options,
        }),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, &config),
    }
}
