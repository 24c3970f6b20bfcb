//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so it
//! can be edited.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.write {
        Some(path) => {
            config.save_to_path(&path)?;
            info!("wrote configuration to {}", path.display());
        },
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
