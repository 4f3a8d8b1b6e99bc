/// Prediction form - input buffer, result and error panels, loading flag
///
/// `PredictForm::submit` implements the whole submission contract:
/// clear panels, check configuration, parse, send once, store the outcome.
/// A second submit while one is in flight is rejected without touching
/// either the network or the displayed panels.
pub mod gate;
pub mod render;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::apis::{PredictClient, PredictionEndpoint};
use crate::config::Config;
use crate::constants::SAMPLE_TRANSACTION_JSON;
use crate::errors::{ConfigError, SubmitError};
use crate::logger::{self, LogTag};
use crate::prediction::PredictResponse;
use crate::transaction::TransactionRecord;

use self::gate::SubmissionGate;

/// Snapshot of everything the view displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub input: String,
    pub result: Option<PredictResponse>,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct PredictForm {
    endpoint: Option<Arc<dyn PredictionEndpoint>>,
    api_base_label: String,
    gate: SubmissionGate,
    state: Mutex<FormState>,
}

impl PredictForm {
    /// Create a form; `endpoint = None` means no API base address is configured
    pub fn new(endpoint: Option<Arc<dyn PredictionEndpoint>>, api_base_label: String) -> Self {
        Self {
            endpoint,
            api_base_label,
            gate: SubmissionGate::new(),
            state: Mutex::new(FormState {
                input: SAMPLE_TRANSACTION_JSON.to_string(),
                ..FormState::default()
            }),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let endpoint = PredictClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn PredictionEndpoint>);
        Ok(Self::new(endpoint, config.describe_api_base()))
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> FormState {
        self.state().clone()
    }

    pub fn input(&self) -> String {
        self.state().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state().input = text.into();
    }

    /// Replace the buffer with the built-in sample record
    pub fn use_sample(&self) {
        self.set_input(SAMPLE_TRANSACTION_JSON);
        logger::debug(LogTag::Form, "Input replaced with sample transaction");
    }

    pub fn api_base_label(&self) -> &str {
        &self.api_base_label
    }

    /// False while a submission is outstanding
    pub fn is_submit_enabled(&self) -> bool {
        !self.gate.is_busy()
    }

    /// Run one submission of the current buffer
    ///
    /// The returned value mirrors what ends up in the panels. `Err(Busy)` is
    /// the only outcome that leaves the panels untouched.
    pub async fn submit(&self) -> Result<PredictResponse, SubmitError> {
        let _guard = match self.gate.try_acquire() {
            Some(guard) => guard,
            None => {
                logger::debug(LogTag::Form, "Submit ignored: request already in flight");
                return Err(SubmitError::Busy);
            }
        };

        let input = {
            let mut state = self.state();
            state.error = None;
            state.result = None;
            state.input.clone()
        };

        let endpoint = match &self.endpoint {
            Some(endpoint) => Arc::clone(endpoint),
            None => return self.fail(SubmitError::MissingApiUrl),
        };

        let record = match TransactionRecord::parse(&input) {
            Ok(record) => record,
            Err(err) => return self.fail(err),
        };

        logger::debug(
            LogTag::Form,
            &format!(
                "Submitting {} numeric features to {}",
                record.numeric_feature_count(),
                endpoint.target()
            ),
        );
        let missing = record.missing_features();
        if !missing.is_empty() {
            logger::debug(
                LogTag::Form,
                &format!("Record lacks expected features: {}", missing.join(", ")),
            );
        }

        self.state().loading = true;
        let outcome = endpoint.predict(&record).await;

        let mut state = self.state();
        state.loading = false;
        match outcome {
            Ok(response) => {
                logger::debug(
                    LogTag::Form,
                    &format!(
                        "Prediction: {} ({})",
                        response.probability_percent(),
                        response.label()
                    ),
                );
                state.result = Some(response);
                Ok(response)
            }
            Err(err) => {
                logger::debug(LogTag::Form, &format!("Prediction failed: {}", err));
                state.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    fn fail(&self, err: SubmitError) -> Result<PredictResponse, SubmitError> {
        logger::debug(LogTag::Form, &format!("Submission stopped locally: {}", err));
        self.state().error = Some(err.user_message());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INVALID_JSON_MESSAGE, MISSING_API_URL_MESSAGE};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Endpoint that records every body and answers from a script
    struct ScriptedEndpoint {
        calls: AtomicUsize,
        bodies: Mutex<Vec<Value>>,
        reply: Result<PredictResponse, SubmitError>,
        release: Option<Arc<Notify>>,
    }

    impl ScriptedEndpoint {
        fn replying(reply: Result<PredictResponse, SubmitError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                bodies: Mutex::new(Vec::new()),
                reply,
                release: None,
            })
        }

        fn blocked_until(release: Arc<Notify>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                bodies: Mutex::new(Vec::new()),
                reply: Ok(PredictResponse {
                    fraud_probability: 0.1,
                    is_fraud: false,
                }),
                release: Some(release),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PredictionEndpoint for ScriptedEndpoint {
        async fn predict(
            &self,
            record: &TransactionRecord,
        ) -> Result<PredictResponse, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies.lock().unwrap().push(record.value().clone());
            if let Some(release) = &self.release {
                release.notified().await;
            }
            self.reply.clone()
        }

        fn target(&self) -> String {
            "scripted".to_string()
        }
    }

    fn form_with(endpoint: &Arc<ScriptedEndpoint>) -> PredictForm {
        PredictForm::new(
            Some(endpoint.clone() as Arc<dyn PredictionEndpoint>),
            "http://test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_invalid_json_never_reaches_endpoint() {
        let endpoint = ScriptedEndpoint::replying(Err(SubmitError::Network("unused".into())));
        let form = form_with(&endpoint);
        form.set_input("{ \"V1\": ");

        let outcome = form.submit().await;

        assert_eq!(outcome, Err(SubmitError::InvalidJson));
        assert_eq!(endpoint.calls(), 0);
        let state = form.snapshot();
        assert_eq!(state.error.as_deref(), Some(INVALID_JSON_MESSAGE));
        assert!(state.result.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_valid_json_sent_once_as_parsed() {
        let endpoint = ScriptedEndpoint::replying(Ok(PredictResponse {
            fraud_probability: 0.87,
            is_fraud: true,
        }));
        let form = form_with(&endpoint);
        form.set_input("{\n  \"V1\": -1.0,\n  \"Amount\": 10.0\n}");

        let response = form.submit().await.unwrap();

        assert_eq!(endpoint.calls(), 1);
        assert_eq!(
            endpoint.bodies.lock().unwrap()[0],
            json!({"V1": -1.0, "Amount": 10.0})
        );
        assert_eq!(response.probability_percent(), "87.00%");
        let state = form.snapshot();
        assert_eq!(state.result, Some(response));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_remote_error_replaces_previous_result() {
        let ok = ScriptedEndpoint::replying(Ok(PredictResponse {
            fraud_probability: 0.2,
            is_fraud: false,
        }));
        let form = form_with(&ok);
        form.submit().await.unwrap();
        assert!(form.snapshot().result.is_some());

        let failing = ScriptedEndpoint::replying(Err(SubmitError::Http {
            status: 400,
            detail: Some("bad input".to_string()),
        }));
        let form = PredictForm {
            endpoint: Some(failing.clone() as Arc<dyn PredictionEndpoint>),
            ..form
        };
        let outcome = form.submit().await;

        assert!(outcome.is_err());
        let state = form.snapshot();
        assert_eq!(state.error.as_deref(), Some("bad input"));
        assert!(state.result.is_none());
    }

    #[tokio::test]
    async fn test_missing_api_url_blocks_before_parsing() {
        let form = PredictForm::new(None, "(not set)".to_string());
        form.set_input("not even json");

        assert_eq!(form.submit().await, Err(SubmitError::MissingApiUrl));
        assert_eq!(
            form.snapshot().error.as_deref(),
            Some(MISSING_API_URL_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_second_submit_rejected_while_in_flight() {
        let release = Arc::new(Notify::new());
        let endpoint = ScriptedEndpoint::blocked_until(release.clone());
        let form = Arc::new(form_with(&endpoint));

        let first = {
            let form = form.clone();
            tokio::spawn(async move { form.submit().await })
        };

        // Wait until the first submission is parked inside the endpoint
        while endpoint.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(form.snapshot().loading);
        assert!(!form.is_submit_enabled());

        assert_eq!(form.submit().await, Err(SubmitError::Busy));
        assert_eq!(endpoint.calls(), 1);
        assert!(form.snapshot().error.is_none());

        release.notify_one();
        let outcome = first.await.unwrap();
        assert!(outcome.is_ok());
        assert!(form.is_submit_enabled());
        assert!(!form.snapshot().loading);
    }

    #[test]
    fn test_use_sample_restores_buffer() {
        let form = PredictForm::new(None, String::new());
        form.set_input("garbage");
        form.use_sample();
        assert_eq!(form.input(), SAMPLE_TRANSACTION_JSON);
    }
}
