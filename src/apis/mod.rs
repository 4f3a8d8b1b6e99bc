/// HTTP clients for the prediction service
pub mod client;
pub mod predict;

pub use client::HttpClient;
pub use predict::{map_predict_response, PredictClient, PredictionEndpoint};
