/// Configuration utilities - loading, overrides and access helpers
///
/// Resolution order (later wins):
/// 1. schema defaults (including the build-time base URL)
/// 2. TOML config file
/// 3. process environment (after `.env` is loaded)
/// 4. command-line overrides
use std::path::{Path, PathBuf};

use super::schemas::{Config, Environment};
use crate::constants::{ENV_API_URL, ENV_ENVIRONMENT, ENV_TIMEOUT_SECS};
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use crate::paths;

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
    pub environment: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolve a configuration without touching global state
///
/// `env_lookup` abstracts the process environment so callers can pass a fixed
/// map in tests.
pub fn resolve_config<F>(overrides: &ConfigOverrides, env_lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_file_to_read(overrides) {
        Some(path) => read_config_file(&path)?,
        None => Config::default(),
    };

    if let Some(url) = env_lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        logger::debug(LogTag::Config, &format!("{} from environment: {}", ENV_API_URL, url));
        config.api.base_url = url;
    }
    if let Some(env) = env_lookup(ENV_ENVIRONMENT).filter(|v| !v.trim().is_empty()) {
        config.environment = env.parse()?;
    }
    if let Some(timeout) = env_lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
        config.api.timeout_secs = timeout
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout(timeout.clone()))?;
    }

    if let Some(url) = &overrides.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(env) = &overrides.environment {
        config.environment = env.parse::<Environment>()?;
    }
    if let Some(timeout) = overrides.timeout_secs {
        config.api.timeout_secs = timeout;
    }

    config.api.base_url = normalize_base_url(&config.api.base_url);
    validate(&config)?;

    logger::debug(
        LogTag::Config,
        &format!(
            "Resolved config: environment={}, api_base={}, timeout={}s",
            config.environment,
            config.describe_api_base(),
            config.api.timeout_secs
        ),
    );

    Ok(config)
}

/// Load `.env` and resolve against the process environment
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config, ConfigError> {
    match dotenv::dotenv() {
        Ok(path) => logger::debug(
            LogTag::Config,
            &format!("Loaded environment file {}", path.display()),
        ),
        Err(_) => logger::debug(LogTag::Config, "No .env file found"),
    }

    let config = resolve_config(overrides, |key| std::env::var(key).ok())?;

    if config.is_missing_api_url() {
        logger::warning(LogTag::Config, crate::constants::MISSING_API_URL_WARNING);
    }

    Ok(config)
}

/// Serialize a configuration the way it is stored on disk
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::Parse {
        path: "<memory>".to_string(),
        message: e.to_string(),
    })
}

fn config_file_to_read(overrides: &ConfigOverrides) -> Option<PathBuf> {
    if let Some(path) = &overrides.config_path {
        return Some(path.clone());
    }
    let default_path = paths::get_default_config_path()?;
    if default_path.exists() {
        Some(default_path)
    } else {
        None
    }
}

fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: display.clone(),
        message: e.to_string(),
    })?;

    logger::debug(LogTag::Config, &format!("Reading config file {}", display));

    toml::from_str::<Config>(&contents).map_err(|e| ConfigError::Parse {
        path: display,
        message: e.to_string(),
    })
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.api.timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout("0".to_string()));
    }

    if let Some(base) = config.api_base() {
        let parsed = url::Url::parse(base).map_err(|e| ConfigError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: base.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidUrl {
                url: base.to_string(),
                reason: "missing host".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    /// Overrides pointing at an empty file so the user's real config is never read.
    /// The file lives as long as the returned handle.
    fn no_file() -> (tempfile::NamedTempFile, ConfigOverrides) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..ConfigOverrides::default()
        };
        (file, overrides)
    }

    #[test]
    fn test_scratch_config_file_is_removed() {
        let path = {
            let (_file, overrides) = no_file();
            let path = overrides.config_path.clone().unwrap();
            assert!(path.exists());
            path
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_environment_variables_apply() {
        let (_file, overrides) = no_file();
        let cfg = resolve_config(
            &overrides,
            lookup(&[
                (ENV_API_URL, "https://fraud.example.com/"),
                (ENV_ENVIRONMENT, "production"),
                (ENV_TIMEOUT_SECS, "5"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.api.base_url, "https://fraud.example.com");
        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.api.timeout_secs, 5);
    }

    #[test]
    fn test_cli_overrides_win_over_environment() {
        let (_file, mut overrides) = no_file();
        overrides.api_url = Some("http://127.0.0.1:9000".to_string());
        overrides.environment = Some("staging".to_string());

        let cfg = resolve_config(
            &overrides,
            lookup(&[(ENV_API_URL, "https://fraud.example.com"), (ENV_ENVIRONMENT, "dev")]),
        )
        .unwrap();

        assert_eq!(cfg.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.environment, Environment::Staging);
    }

    #[test]
    fn test_config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "environment = \"production\"\n[api]\nbase_url = \"http://fraud.internal:8000/\"\ntimeout_secs = 12\n"
        )
        .unwrap();

        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..ConfigOverrides::default()
        };
        let cfg = resolve_config(&overrides, lookup(&[])).unwrap();

        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.api.base_url, "http://fraud.internal:8000");
        assert_eq!(cfg.api.timeout_secs, 12);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let overrides = ConfigOverrides {
            config_path: Some(PathBuf::from("/nonexistent/fraudscope/config.toml")),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve_config(&overrides, lookup(&[])),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let (_file, overrides) = no_file();
        assert!(matches!(
            resolve_config(&overrides, lookup(&[(ENV_API_URL, "ftp://fraud.example.com")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            resolve_config(&overrides, lookup(&[(ENV_API_URL, "not a url")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            resolve_config(&overrides, lookup(&[(ENV_TIMEOUT_SECS, "soon")])),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            resolve_config(&overrides, lookup(&[(ENV_ENVIRONMENT, "qa")])),
            Err(ConfigError::InvalidEnvironment(_))
        ));
    }

    #[test]
    fn test_empty_environment_values_are_ignored() {
        let (_file, mut overrides) = no_file();
        overrides.environment = Some("production".to_string());
        let cfg = resolve_config(&overrides, lookup(&[(ENV_API_URL, "   ")])).unwrap();
        assert_eq!(
            cfg.api.base_url,
            normalize_base_url(&super::super::schemas::build_time_base_url())
        );
    }
}
