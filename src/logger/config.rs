/// Logger configuration derived from command-line flags
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::{has_arg, is_quiet_enabled, is_verbose_enabled};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (errors always pass)
    pub min_level: LogLevel,
    /// Tags with --debug-<tag>
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub(super) fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Build the logger configuration from the stored command-line arguments
pub fn init_from_args() {
    set_logger_config(build_config(is_verbose_enabled(), is_quiet_enabled(), has_arg));
}

/// Derive a configuration from the verbosity switches and a flag lookup
fn build_config<F>(verbose: bool, quiet: bool, has_flag: F) -> LoggerConfig
where
    F: Fn(&str) -> bool,
{
    let mut config = LoggerConfig::default();

    for tag in LogTag::all_known() {
        let key = tag.to_debug_key();
        if has_flag(&format!("--debug-{}", key)) {
            config.debug_tags.insert(key);
        }
    }

    // --quiet wins over debug flags; any debug flag opens the debug level
    if verbose {
        config.min_level = LogLevel::Verbose;
    } else if quiet {
        config.min_level = LogLevel::Warning;
    } else if !config.debug_tags.is_empty() {
        config.min_level = LogLevel::Debug;
    }

    config
}

pub(super) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_tags.contains(&tag.to_debug_key())
}
