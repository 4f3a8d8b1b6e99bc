/// Prediction service response types
///
/// `PredictResponse` is what a successful `POST /api/v1/predict` returns.
/// `ErrorBody` is the optional `{ "detail": ... }` payload of a rejection.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SubmitError;

// ============================================================================
// SUCCESS PAYLOAD
// ============================================================================

/// Fraud prediction result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Probability of fraud (0-1)
    pub fraud_probability: f64,

    /// True if the service classified the transaction as fraud
    pub is_fraud: bool,
}

impl PredictResponse {
    /// Decode and check a 2xx body
    ///
    /// Both fields must be present with the right types, and the probability
    /// must be a finite value inside [0, 1].
    pub fn from_body(body: &str) -> Result<Self, SubmitError> {
        let response: PredictResponse = serde_json::from_str(body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
        response.validate()?;
        Ok(response)
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if !self.fraud_probability.is_finite() || !(0.0..=1.0).contains(&self.fraud_probability)
        {
            return Err(SubmitError::MalformedResponse(format!(
                "fraud_probability {} is outside [0, 1]",
                self.fraud_probability
            )));
        }
        Ok(())
    }

    /// Probability as a percentage with two decimals, e.g. `87.00%`
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.fraud_probability * 100.0)
    }

    pub fn label(&self) -> &'static str {
        if self.is_fraud {
            "Fraud"
        } else {
            "Not fraud"
        }
    }
}

// ============================================================================
// ERROR PAYLOAD
// ============================================================================

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parse a rejection body; anything that is not a JSON object yields no detail
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Detail text for the error panel
    ///
    /// A string detail is used as-is. Structured details (validation error
    /// lists) are shown as compact JSON. `null` counts as absent.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_formatting() {
        let response =
            PredictResponse::from_body(r#"{"fraud_probability":0.87,"is_fraud":true}"#).unwrap();
        assert_eq!(response.probability_percent(), "87.00%");
        assert_eq!(response.label(), "Fraud");

        let low = PredictResponse {
            fraud_probability: 0.000123,
            is_fraud: false,
        };
        assert_eq!(low.probability_percent(), "0.01%");
        assert_eq!(low.label(), "Not fraud");
    }

    #[test]
    fn test_boundaries_are_accepted() {
        assert!(PredictResponse::from_body(r#"{"fraud_probability":0,"is_fraud":false}"#).is_ok());
        assert!(PredictResponse::from_body(r#"{"fraud_probability":1.0,"is_fraud":true}"#).is_ok());
    }

    #[test]
    fn test_malformed_success_bodies_rejected() {
        let cases = [
            r#"{"fraud_probability":1.5,"is_fraud":true}"#,
            r#"{"fraud_probability":-0.1,"is_fraud":false}"#,
            r#"{"fraud_probability":"0.5","is_fraud":false}"#,
            r#"{"fraud_probability":0.5}"#,
            r#"{"is_fraud":true}"#,
            "not json",
        ];
        for body in cases {
            match PredictResponse::from_body(body) {
                Err(SubmitError::MalformedResponse(_)) => {}
                other => panic!("body {:?} gave {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_error_body_detail_variants() {
        assert_eq!(
            ErrorBody::from_body(r#"{"detail":"bad input"}"#).detail_text(),
            Some("bad input".to_string())
        );
        assert_eq!(ErrorBody::from_body(r#"{"detail":null}"#).detail_text(), None);
        assert_eq!(ErrorBody::from_body(r#"{"error":"x"}"#).detail_text(), None);
        assert_eq!(ErrorBody::from_body("<html>bad gateway</html>").detail_text(), None);
        assert_eq!(
            ErrorBody::from_body(r#"{"detail":[{"msg":"field required"}]}"#).detail_text(),
            Some(r#"[{"msg":"field required"}]"#.to_string())
        );
    }
}
