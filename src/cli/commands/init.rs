use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values. An existing file is
/// left untouched unless `--force` is given.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::default().save(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
