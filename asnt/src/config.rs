//! `asnt.toml` handling.
//!
//! Every key is optional; missing keys take their defaults, and command-line
//! flags override what the file says.

use std::path::{Path, PathBuf};

use asnc_lex::LexerOptions;
use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};

use crate::error::{AsntError, Result};

pub const CONFIG_FILE_NAME: &str = "asnt.toml";

/// How `asnt tokens` prints its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: location, kind, spelling.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

/// Settings read from `asnt.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format for `asnt tokens`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Lexer behavior.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Treat an unterminated block comment as an error.
    #[serde(default)]
    pub strict_comments: bool,
}

/// `[check]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl From<&LexerConfig> for LexerOptions {
    fn from(config: &LexerConfig) -> Self {
        LexerOptions {
            strict_comments: config.strict_comments,
        }
    }
}

impl Config {
    /// Loads `asnt.toml` from the first place it exists: the current
    /// directory, `~/.config/asnt/`, then the platform config directory.
    /// Without a file the defaults apply.
    pub fn load() -> Result<Self> {
        match search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the file at `path`; a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AsntError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| AsntError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AsntError::Config(format!("cannot serialize configuration: {}", e)))
    }

    pub fn lexer_options(&self) -> LexerOptions {
        LexerOptions::from(&self.lexer)
    }
}

/// Candidate configuration files, most specific first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = home_dir() {
        paths.push(home.join(".config").join("asnt").join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = config_dir() {
        paths.push(dir.join("asnt").join(CONFIG_FILE_NAME));
    }
    paths
}
