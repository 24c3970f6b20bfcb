//! Command modules for the asnt CLI.
//!
//! Each subcommand is implemented in its own file: an arguments struct plus
//! a `run_*` entry point. Shared source loading and diagnostic rendering live
//! in `common`.

pub mod common;

pub mod check;
pub mod config;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use config::{run_config, ConfigArgs};
pub use tokens::{run_tokens, TokensArgs};
