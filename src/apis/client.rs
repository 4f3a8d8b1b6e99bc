/// Base HTTP client shared by the API wrappers
use reqwest::Client;
use std::time::Duration;

use crate::errors::ConfigError;

/// HTTP client wrapper with timeout and user agent
///
/// No retry layer: every call is sent exactly once.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
