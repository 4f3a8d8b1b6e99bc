/// Prediction service client
///
/// Endpoints implemented:
/// 1. POST /api/v1/predict - score one transaction record
/// 2. GET /api/v1/utils/health-check/ - liveness probe
use async_trait::async_trait;
use std::time::Instant;

use crate::apis::client::HttpClient;
use crate::config::Config;
use crate::constants::{HEALTH_CHECK_PATH, PREDICT_PATH};
use crate::errors::{ConfigError, SubmitError};
use crate::logger::{self, LogTag};
use crate::prediction::{ErrorBody, PredictResponse};
use crate::transaction::TransactionRecord;

// ============================================================================
// ENDPOINT SEAM
// ============================================================================

/// Anything that can score a transaction record
///
/// The form only talks to this trait, so a scripted implementation can stand
/// in for the network.
#[async_trait]
pub trait PredictionEndpoint: Send + Sync {
    /// Send one record and return the validated prediction
    async fn predict(&self, record: &TransactionRecord) -> Result<PredictResponse, SubmitError>;

    /// Human-readable target, used in logs
    fn target(&self) -> String;
}

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct PredictClient {
    http_client: HttpClient,
    base_url: String,
}

impl PredictClient {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs, user_agent)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the resolved configuration
    ///
    /// Returns `Ok(None)` when the configuration has no usable base address;
    /// callers turn that into `SubmitError::MissingApiUrl` at submit time.
    pub fn from_config(config: &Config) -> Result<Option<Self>, ConfigError> {
        match config.effective_base_url() {
            Ok(base) => Ok(Some(Self::new(
                &base,
                config.api.timeout_secs,
                &config.api.user_agent,
            )?)),
            Err(_) => Ok(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    pub fn health_check_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_CHECK_PATH)
    }

    /// POST the record as JSON and map the outcome
    pub async fn post_predict(
        &self,
        record: &TransactionRecord,
    ) -> Result<PredictResponse, SubmitError> {
        let url = self.predict_url();
        logger::debug(
            LogTag::Api,
            &format!("POST {} body={}", url, record.to_body()),
        );

        let start = Instant::now();
        let response = self
            .http_client
            .client()
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                logger::debug(LogTag::Api, &format!("predict request failed: {}", e));
                SubmitError::from(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        let elapsed_ms = start.elapsed().as_millis();

        logger::debug(
            LogTag::Api,
            &format!("predict HTTP {} in {}ms", status, elapsed_ms),
        );
        logger::verbose(LogTag::Api, &format!("predict response body: {}", body));

        map_predict_response(status, &body)
    }

    /// GET the health-check route; `Ok(true)` when the service answers `true`
    pub async fn health_check(&self) -> Result<bool, SubmitError> {
        let url = self.health_check_url();
        logger::debug(LogTag::Api, &format!("GET {}", url));

        let response = self.http_client.client().get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(SubmitError::Http {
                status,
                detail: ErrorBody::from_body(&body).detail_text(),
            });
        }

        serde_json::from_str::<bool>(body.trim())
            .map_err(|e| SubmitError::MalformedResponse(format!("health-check: {}", e)))
    }
}

#[async_trait]
impl PredictionEndpoint for PredictClient {
    async fn predict(&self, record: &TransactionRecord) -> Result<PredictResponse, SubmitError> {
        self.post_predict(record).await
    }

    fn target(&self) -> String {
        self.predict_url()
    }
}

/// Map a status code and body to the form outcome
///
/// - 2xx: decode and validate the prediction
/// - anything else: `detail` from the body when present, else the status code
pub fn map_predict_response(status: u16, body: &str) -> Result<PredictResponse, SubmitError> {
    if (200..300).contains(&status) {
        return PredictResponse::from_body(body);
    }

    Err(SubmitError::Http {
        status,
        detail: ErrorBody::from_body(body).detail_text(),
    })
}
