/// Centralized argument handling for fraudscope
///
/// The clap parser in main.rs owns subcommands and their options. This module
/// keeps a raw copy of the command line so that cross-cutting switches
/// (debug flags, verbosity) can be checked from anywhere without threading
/// the parsed struct through every call.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

use crate::logger::LogTag;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Replace the stored arguments
#[cfg(test)]
fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

// =============================================================================
// VERBOSITY AND DEBUG FLAGS
// =============================================================================

pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose") || has_arg("-v")
}

pub fn is_quiet_enabled() -> bool {
    has_arg("--quiet") || has_arg("-q")
}

/// Gets a list of all enabled debug modes
pub fn get_enabled_debug_modes() -> Vec<String> {
    let mut modes: Vec<String> = LogTag::all_known()
        .iter()
        .map(|tag| tag.to_debug_key())
        .filter(|key| has_arg(&format!("--debug-{}", key)))
        .collect();

    if is_verbose_enabled() {
        modes.push("verbose".to_string());
    }

    modes
}

pub fn is_any_debug_enabled() -> bool {
    !get_enabled_debug_modes().is_empty()
}

/// Text appended to clap's --help output
pub fn debug_flags_help() -> &'static str {
    "DEBUG FLAGS:
    --debug-api               Log request URLs, bodies and response statuses
    --debug-config            Log configuration resolution steps
    --debug-form              Log form state transitions
    --debug-system            Log startup details
    --verbose, -v             Enable every debug and verbose log line
    --quiet, -q               Only log warnings and errors

EXAMPLES:
    fraudscope predict --sample
    fraudscope predict --file tx.json --api-url https://fraud.example.com
    cat tx.json | fraudscope predict --file - --debug-api
    fraudscope form
    fraudscope health"
}

#[cfg(test)]
mod tests {
    use super::*;

    // CMD_ARGS is process-global; keep every mutation inside one test
    #[test]
    fn test_argument_store() {
        set_cmd_args(vec![
            "fraudscope".to_string(),
            "predict".to_string(),
            "--debug-api".to_string(),
            "--api-url".to_string(),
            "http://localhost:9000".to_string(),
            "--env=staging".to_string(),
        ]);

        assert!(has_arg("--debug-api"));
        assert!(!has_arg("--debug-form"));
        assert!(is_any_debug_enabled());
        assert_eq!(get_enabled_debug_modes(), vec!["api".to_string()]);

        set_cmd_args(vec!["fraudscope".to_string(), "-v".to_string()]);
        assert!(is_verbose_enabled());
        assert!(!is_quiet_enabled());
        assert_eq!(get_enabled_debug_modes(), vec!["verbose".to_string()]);
    }
}
