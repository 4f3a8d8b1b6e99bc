//! Centralized path resolution for fraudscope
//!
//! Uses platform configuration directories:
//! - **macOS**: `~/Library/Application Support/fraudscope/`
//! - **Windows**: `%APPDATA%\fraudscope\`
//! - **Linux**: `$XDG_CONFIG_HOME/fraudscope/` (fallback `~/.config/fraudscope/`)

use std::path::PathBuf;

const APP_DIR: &str = "fraudscope";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding the user configuration, if the platform has one
pub fn get_config_directory() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join(APP_DIR))
}

/// Config file read when `--config` is not given
pub fn get_default_config_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE_NAME))
}
