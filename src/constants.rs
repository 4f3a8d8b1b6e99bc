//! Global constants used across fraudscope
//!
//! This module contains system-wide constants that are not configurable
//! and are used across multiple modules.

// ============================================================================
// PREDICTION SERVICE ROUTES
// ============================================================================

/// Compile-time version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prediction route, relative to the API base
pub const PREDICT_PATH: &str = "/api/v1/predict";

/// Liveness route, relative to the API base (the trailing slash is part of the route)
pub const HEALTH_CHECK_PATH: &str = "/api/v1/utils/health-check/";

/// Address used in development builds when no base URL is configured
pub const DEV_FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Request timeout when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// ENVIRONMENT VARIABLES
// ============================================================================

pub const ENV_API_URL: &str = "FRAUDSCOPE_API_URL";
pub const ENV_ENVIRONMENT: &str = "FRAUDSCOPE_ENV";
pub const ENV_TIMEOUT_SECS: &str = "FRAUDSCOPE_TIMEOUT_SECS";

// ============================================================================
// USER-FACING MESSAGES
// ============================================================================

/// Shown when the input buffer is not valid JSON
pub const INVALID_JSON_MESSAGE: &str =
    "Invalid JSON. Paste a single transaction object with V1–V28 and Amount.";

/// Shown when a non-development build has no API base address
pub const MISSING_API_URL_MESSAGE: &str =
    "API URL is not set. Set FRAUDSCOPE_API_URL (see .env.example).";

/// Logged once at startup for the same condition
pub const MISSING_API_URL_WARNING: &str =
    "FRAUDSCOPE_API_URL is not set; predict requests will fail.";

/// Shown when a submission is attempted while another one is in flight
pub const SUBMIT_BUSY_MESSAGE: &str = "A prediction request is already in progress.";

// ============================================================================
// TRANSACTION FEATURES
// ============================================================================

/// Feature names of the credit-card fraud dataset, in model order
pub const FEATURE_COLUMNS: [&str; 29] = [
    "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12", "V13", "V14",
    "V15", "V16", "V17", "V18", "V19", "V20", "V21", "V22", "V23", "V24", "V25", "V26", "V27",
    "V28", "Amount",
];

/// Sample record loaded by `:sample` and `fraudscope sample`
pub const SAMPLE_TRANSACTION_JSON: &str = r#"{
  "V1": -1.0, "V2": 0.5, "V3": -0.2, "V4": 0.1, "V5": -0.5,
  "V6": 0.3, "V7": 0.0, "V8": -0.1, "V9": 0.2, "V10": -0.3,
  "V11": 0.1, "V12": 0.0, "V13": -0.2, "V14": 0.1, "V15": 0.0,
  "V16": -0.1, "V17": 0.0, "V18": 0.1, "V19": -0.1, "V20": 0.0,
  "V21": 0.0, "V22": 0.0, "V23": 0.0, "V24": 0.0, "V25": 0.0,
  "V26": 0.0, "V27": 0.0, "V28": 0.0, "Amount": 10.0
}"#;
