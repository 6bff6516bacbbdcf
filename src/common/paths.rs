//! Configuration file locations
//!
//! Uses the directories crate for platform-appropriate paths:
//! - Linux: `~/.config/simtest-cli/`
//! - macOS: `~/Library/Application Support/simtest-cli/`
//! - Windows: `%APPDATA%\simtest-cli\`

use std::path::PathBuf;

const APP_NAME: &str = "simtest-cli";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
