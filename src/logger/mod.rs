//! Structured logging for fraudscope
//!
//! This module provides a small tagged logging API with:
//! - Automatic debug mode filtering from command-line arguments
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Colored output on stderr (stdout is reserved for rendered panels)
//!
//! ## Usage
//!
//! ```rust
//! use fraudscope::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::warning(LogTag::Config, "FRAUDSCOPE_API_URL is not set");
//! logger::info(LogTag::Form, "Prediction received");
//! logger::debug(LogTag::Api, "Request body: ..."); // Only if --debug-api
//! logger::verbose(LogTag::Api, "Raw response: ..."); // Only if --verbose
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, before any logging occurs:
//! ```rust
//! fraudscope::logger::init();
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless the threshold is raised above it)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Debug logs are ONLY shown when the --debug-<tag> flag for that tag is provided.
///
/// # Example
/// ```rust
/// use fraudscope::logger::{self, LogTag};
///
/// // Only shown with --debug-api flag
/// logger::debug(LogTag::Api, "POST http://localhost:8000/api/v1/predict");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (requires --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
