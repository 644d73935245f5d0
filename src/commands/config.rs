//! Config command - show, locate and change settings

use crate::{AppError, cli::ConfigCommands, config::AppConfig};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, AppError>;

/// Execute a config subcommand against the file at `config_path`
///
/// # Errors
/// Returns an error for a malformed `KEY=VALUE`, an unknown key or value,
/// or if the file cannot be written
pub fn execute(
    mut config: AppConfig,
    command: &ConfigCommands,
    config_path: &Path,
    quiet: bool,
    mut out: impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                AppError::InvalidInput("Invalid format. Use: petits-plats config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get(key)?)?;
            }
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get(key)?)?;
        }
    }
    Ok(())
}
