use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";
const DEFAULT_DELIVERY_DELAY_MS: u64 = 50;
const DEFAULT_CONFIG_FILE: &str = "askcampus.toml";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub api_key: SecretString,
    pub endpoint: String,
}

#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Simulated backing-store round trip before a snapshot is delivered.
    pub delivery_delay_ms: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

/// Programmatic overrides applied after file and environment layers. Used by
/// tests and embedding hosts that already hold their configuration.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub delivery_delay_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig {
                api_key: String::new().into(),
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
            feed: FeedConfig { delivery_delay_ms: DEFAULT_DELIVERY_DELAY_MS },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    assistant: Option<AssistantPatch>,
    feed: Option<FeedPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct AssistantPatch {
    api_key: Option<String>,
    endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FeedPatch {
    delivery_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(assistant) = patch.assistant {
            if let Some(api_key_value) = assistant.api_key {
                self.assistant.api_key = api_key_value.into();
            }
            if let Some(endpoint) = assistant.endpoint {
                self.assistant.endpoint = endpoint;
            }
        }

        if let Some(feed) = patch.feed {
            if let Some(delivery_delay_ms) = feed.delivery_delay_ms {
                self.feed.delivery_delay_ms = delivery_delay_ms;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(api_key_value) = env::var("ASKCAMPUS_API_KEY") {
            self.assistant.api_key = api_key_value.into();
        }
        if let Ok(endpoint) = env::var("ASKCAMPUS_ENDPOINT") {
            self.assistant.endpoint = endpoint;
        }
        if let Ok(raw) = env::var("ASKCAMPUS_FEED_DELAY_MS") {
            self.feed.delivery_delay_ms =
                raw.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                    key: "ASKCAMPUS_FEED_DELAY_MS".to_string(),
                    value: raw,
                })?;
        }
        if let Ok(level) = env::var("ASKCAMPUS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(raw) = env::var("ASKCAMPUS_LOG_FORMAT") {
            self.logging.format = raw.parse()?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(api_key_value) = overrides.api_key {
            self.assistant.api_key = api_key_value.into();
        }
        if let Some(endpoint) = overrides.endpoint {
            self.assistant.endpoint = endpoint;
        }
        if let Some(delivery_delay_ms) = overrides.delivery_delay_ms {
            self.feed.delivery_delay_ms = delivery_delay_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// A missing key or endpoint is a configuration error at load time, not
    /// a runtime assistant failure.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.assistant.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Validation("assistant.api_key is required".to_string()));
        }
        if !self.assistant.endpoint.starts_with("https://")
            && !self.assistant.endpoint.starts_with("http://")
        {
            return Err(ConfigError::Validation(format!(
                "assistant.endpoint must be an http(s) URL, got `{}`",
                self.assistant.endpoint
            )));
        }
        Ok(())
    }
}

fn resolve_config_path(requested: Option<&Path>) -> Option<PathBuf> {
    match requested {
        Some(path) if path.exists() => Some(path.to_path_buf()),
        Some(_) => None,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            default_path.exists().then_some(default_path)
        }
    }
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}
