/// Configuration system for fraudscope
///
/// - `macros`: the `config_struct!` macro
/// - `schemas`: configuration structures with embedded defaults
/// - `utils`: loading and overrides
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{ApiConfig, Config, Environment};
pub use utils::{load_config, resolve_config, to_toml, ConfigOverrides};
