//! XDG-style path utilities for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for langize.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/langize` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/langize` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("langize")),
        _ => Ok(home_dir()?.join(".config").join("langize")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
