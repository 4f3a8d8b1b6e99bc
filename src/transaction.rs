/// Transaction record held by the form
///
/// The record is whatever JSON the user typed. Only syntax is checked; the
/// parsed value is sent to the prediction service unchanged.
use serde::Serialize;
use serde_json::Value;

use crate::constants::{FEATURE_COLUMNS, SAMPLE_TRANSACTION_JSON};
use crate::errors::SubmitError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionRecord(Value);

impl TransactionRecord {
    /// Parse the input buffer. Any syntax error maps to `SubmitError::InvalidJson`.
    pub fn parse(text: &str) -> Result<Self, SubmitError> {
        serde_json::from_str::<Value>(text)
            .map(Self)
            .map_err(|_| SubmitError::InvalidJson)
    }

    /// The built-in sample record
    pub fn sample() -> Self {
        // The sample is a compile-time constant covered by tests
        Self(serde_json::from_str(SAMPLE_TRANSACTION_JSON).unwrap_or(Value::Null))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Number of top-level fields holding a number (0 for non-objects)
    pub fn numeric_feature_count(&self) -> usize {
        match &self.0 {
            Value::Object(map) => map.values().filter(|v| v.is_number()).count(),
            _ => 0,
        }
    }

    /// Expected feature names missing from the record, for debug logging only
    pub fn missing_features(&self) -> Vec<&'static str> {
        match &self.0 {
            Value::Object(map) => FEATURE_COLUMNS
                .iter()
                .copied()
                .filter(|name| !map.contains_key(*name))
                .collect(),
            _ => FEATURE_COLUMNS.to_vec(),
        }
    }

    /// Compact JSON body as it goes on the wire
    pub fn to_body(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_any_valid_json() {
        let record = TransactionRecord::parse(r#"{"V1": 1.5, "Amount": 3}"#).unwrap();
        assert_eq!(record.value(), &json!({"V1": 1.5, "Amount": 3}));

        // Schema is not checked beyond syntax
        assert!(TransactionRecord::parse("[1, 2, 3]").is_ok());
        assert!(TransactionRecord::parse("42").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        for input in ["", "{", "{\"V1\": }", "V1=1.0", "{'V1': 1.0}"] {
            assert_eq!(
                TransactionRecord::parse(input),
                Err(SubmitError::InvalidJson),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_sample_has_all_features() {
        let sample = TransactionRecord::sample();
        assert_eq!(sample.numeric_feature_count(), 29);
        assert!(sample.missing_features().is_empty());
        assert_eq!(sample.value()["Amount"], json!(10.0));
    }

    #[test]
    fn test_missing_features_reported() {
        let record = TransactionRecord::parse(r#"{"V1": 0.0}"#).unwrap();
        let missing = record.missing_features();
        assert_eq!(missing.len(), 28);
        assert!(!missing.contains(&"V1"));
        assert!(missing.contains(&"Amount"));
    }

    #[test]
    fn test_body_is_parsed_value() {
        let record = TransactionRecord::parse("{ \"V2\" :  -0.5 }").unwrap();
        assert_eq!(record.to_body(), r#"{"V2":-0.5}"#);
    }
}
