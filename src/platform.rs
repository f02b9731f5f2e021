//! Cross-platform config location.
//!
//! Resolution order for the config file:
//! 1. Explicit override (`--config`, tests)
//! 2. Home directory (`~/.sleep-owl/config.toml`)
//! 3. Platform config directory (XDG on Linux, AppData on Windows)

use anyhow::Result;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sleep-owl";
const CONFIG_FILE: &str = "config.toml";

/// Directory that holds the config file when no override is given.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = home::home_dir() {
        return Ok(home.join(format!(".{}", APP_DIR)));
    }

    // - Linux: ~/.config/sleep-owl
    // - macOS: ~/Library/Application Support/sleep-owl
    // - Windows: C:\Users\<User>\AppData\Roaming\sleep-owl
    if let Some(dir) = dirs::config_dir() {
        return Ok(dir.join(APP_DIR));
    }

    anyhow::bail!("Could not determine a config directory. Pass --config <PATH> instead.")
}

/// Get the config file path, respecting an explicit override.
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config_dir()?.join(CONFIG_FILE)),
    }
}
