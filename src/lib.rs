pub mod apis;
pub mod arguments;
pub mod config;
pub mod constants;
pub mod errors;
pub mod form;
pub mod interactive;
pub mod logger;
pub mod paths;
pub mod prediction;
pub mod transaction;
