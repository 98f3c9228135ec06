use serde::Deserialize;
use service_core::config as core_config;
use std::env;
use std::time::Duration;

const DEFAULT_SERVICE_NAME: &str = "gherkin-service";

#[derive(Debug, Clone, Deserialize)]
pub struct GherkinConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationConfig {
    /// Upper bound on a single backend call; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl GenerationConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("{0} is required in production but not set")]
    MissingInProduction(String),

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
}

impl GherkinConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GherkinConfig {
            common,
            service_name: get_env("GHERKIN_SERVICE_NAME", Some(DEFAULT_SERVICE_NAME), is_prod)?
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            generation: GenerationConfig {
                timeout_ms: parse_timeout_ms(
                    "GHERKIN_GENERATION_TIMEOUT_MS",
                    get_env("GHERKIN_GENERATION_TIMEOUT_MS", None, false)?,
                )?,
            },
        })
    }

    /// Configuration for tests: random port, no trace export, no timeout.
    pub fn for_tests() -> Self {
        GherkinConfig {
            common: core_config::Config {
                port: 0,
                ..core_config::Config::default()
            },
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Reads an environment variable; in production a key with a default must
/// still be set explicitly.
fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(_) if is_prod && default.is_some() => {
            Err(ConfigError::MissingInProduction(key.to_string()))
        }
        Err(_) => Ok(default.map(str::to_string)),
    }
}

/// `0` and unset both disable the timeout.
fn parse_timeout_ms(key: &str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(ms) => Ok(Some(ms)),
        Err(_) => Err(ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw,
        }),
    }
}
