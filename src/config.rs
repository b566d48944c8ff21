//! Process configuration, resolved once at startup and read-only afterwards.

use std::time::Duration;

use crate::error::{PlannerError, Result};

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const PORT_ENV: &str = "PORT";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_ENV: &str = "GEMINI_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "models/gemini-1.5-pro";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

const API_KEY_PREVIEW_CHARS: usize = 5;

#[derive(Clone, Debug)]
pub struct PlannerConfig {
    api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    /// Per-request timeout for the generation service; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
}

impl PlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(missing_api_key());
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        })
    }

    /// Build the configuration from environment variables.
    ///
    /// `GOOGLE_API_KEY` is required. `PORT`, `GEMINI_MODEL`, `GEMINI_BASE_URL`
    /// and `GEMINI_TIMEOUT_SECS` are optional overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_api_key(None)
    }

    /// Like [`PlannerConfig::from_env`], but an explicit key takes precedence
    /// over `GOOGLE_API_KEY`.
    pub fn from_env_with_api_key(api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV).map_err(|_| missing_api_key())?,
        };
        let mut config = Self::new(api_key)?;

        if let Some(port) = non_empty_var(PORT_ENV) {
            config.port = port.parse().map_err(|_| {
                PlannerError::Config(format!("{PORT_ENV} must be a valid port number, got `{port}`"))
            })?;
        }
        if let Some(model) = non_empty_var(MODEL_ENV) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(timeout) = non_empty_var(TIMEOUT_ENV) {
            config.request_timeout = Some(parse_timeout(&timeout)?);
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// First few characters of the credential followed by an ellipsis.
    pub fn api_key_preview(&self) -> String {
        preview_api_key(&self.api_key)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn preview_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "No API key found".to_string();
    }
    let prefix: String = api_key.chars().take(API_KEY_PREVIEW_CHARS).collect();
    format!("{prefix}...")
}

pub fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            PlannerError::Config(format!(
                "timeout must be a whole number of seconds, got `{raw}`"
            ))
        })
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn missing_api_key() -> PlannerError {
    PlannerError::Config(format!("{API_KEY_ENV} not found in environment variables"))
}
