/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro which provides:
/// - Single-source definition (no repetition)
/// - Embedded defaults
/// - Serde support
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config_struct;
use crate::constants::{
    DEFAULT_TIMEOUT_SECS, DEV_FALLBACK_BASE_URL, PREDICT_PATH, VERSION,
};
use crate::errors::{ConfigError, SubmitError};

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Deployment environment of the client
///
/// Only `Development` may run without an API base address; it then talks to
/// the backend's local dev address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev", alias = "local")]
    Development,
    Staging,
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    /// Debug builds default to development, release builds to production
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URL baked in at compile time, empty when the variable was unset
pub fn build_time_base_url() -> String {
    option_env!("FRAUDSCOPE_API_URL").unwrap_or("").to_string()
}

// ============================================================================
// API CONFIGURATION
// ============================================================================

config_struct! {
    /// Prediction service connection settings
    pub struct ApiConfig {
        /// Base address of the prediction service; empty means unset
        base_url: String = build_time_base_url(),
        /// Per-request timeout in seconds
        timeout_secs: u64 = DEFAULT_TIMEOUT_SECS,
        user_agent: String = format!("fraudscope/{}", VERSION),
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration
    pub struct Config {
        environment: Environment = Environment::build_default(),
        api: ApiConfig = ApiConfig::default(),
    }
}

impl Config {
    /// Configured base address, `None` when unset
    pub fn api_base(&self) -> Option<&str> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            None
        } else {
            Some(base)
        }
    }

    /// Base address requests go to
    ///
    /// Falls back to the local dev address in development; any other
    /// environment without a base address cannot submit.
    pub fn effective_base_url(&self) -> Result<String, SubmitError> {
        match self.api_base() {
            Some(base) => Ok(base.trim_end_matches('/').to_string()),
            None if self.environment.is_development() => Ok(DEV_FALLBACK_BASE_URL.to_string()),
            None => Err(SubmitError::MissingApiUrl),
        }
    }

    pub fn predict_url(&self) -> Result<String, SubmitError> {
        Ok(format!("{}{}", self.effective_base_url()?, PREDICT_PATH))
    }

    /// True when submissions are refused for lack of a base address
    pub fn is_missing_api_url(&self) -> bool {
        self.api_base().is_none() && !self.environment.is_development()
    }

    /// Text for the "API base" footer line
    pub fn describe_api_base(&self) -> String {
        match self.api_base() {
            Some(base) => base.to_string(),
            None if self.environment.is_development() => {
                format!("(dev: {})", DEV_FALLBACK_BASE_URL)
            }
            None => "(not set)".to_string(),
        }
    }
}
