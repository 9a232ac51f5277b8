//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::load_config;
use crate::domain::Config;

/// Load the config named by `--config`, or discover one in the working directory.
pub fn load_cli_config(config_path: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    load_config(&cwd, config_path)
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_or_print(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed creating {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed writing {}", path.display()))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
