/// Error types for fraudscope
///
/// `SubmitError` covers every way a single form submission can end without a
/// result; its `Display` text is exactly what the error panel shows.
/// `ConfigError` covers configuration loading before any submission happens.
use thiserror::Error;

use crate::constants::{INVALID_JSON_MESSAGE, MISSING_API_URL_MESSAGE, SUBMIT_BUSY_MESSAGE};

// =============================================================================
// SUBMISSION ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("{}", INVALID_JSON_MESSAGE)]
    InvalidJson,

    #[error("{}", MISSING_API_URL_MESSAGE)]
    MissingApiUrl,

    #[error("{}", SUBMIT_BUSY_MESSAGE)]
    Busy,

    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },

    #[error("{0}")]
    Network(String),

    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),
}

fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP {}", status),
    }
}

impl SubmitError {
    /// Text for the error panel
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Network(err.to_string())
    }
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unknown environment '{0}' (expected development, staging or production)")]
    InvalidEnvironment(String),

    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_server_detail() {
        let err = SubmitError::Http {
            status: 400,
            detail: Some("bad input".to_string()),
        };
        assert_eq!(err.user_message(), "bad input");
    }

    #[test]
    fn test_http_error_without_detail_shows_status() {
        let err = SubmitError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[test]
    fn test_local_errors_use_fixed_messages() {
        assert_eq!(SubmitError::InvalidJson.user_message(), INVALID_JSON_MESSAGE);
        assert_eq!(SubmitError::MissingApiUrl.user_message(), MISSING_API_URL_MESSAGE);
    }

    #[test]
    fn test_network_error_is_verbatim() {
        let err = SubmitError::Network("error sending request".to_string());
        assert_eq!(err.user_message(), "error sending request");
    }
}
