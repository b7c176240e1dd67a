//! OpenWeatherMap upstream configuration.

use std::env;
use std::time::Duration;

/// Unit system requested on every weather call; temperatures come back in Celsius.
pub const UNITS: &str = "metric";

/// Language for the localized weather description.
pub const LANGUAGE: &str = "es";

/// Only the best geocoding match is used.
pub const GEOCODING_LIMIT: u8 = 1;

/// Errors raised while loading configuration at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Connection settings for the OpenWeatherMap geocoding and weather endpoints
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    pub api_key: String,
    pub geocoding_url: String,
    pub weather_url: String,
    /// Upper bound for a single upstream call (in seconds)
    pub timeout_seconds: u64,
    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,
}

impl OpenWeatherConfig {
    /// Build a configuration with default timeouts
    pub fn new(
        api_key: impl Into<String>,
        geocoding_url: impl Into<String>,
        weather_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            geocoding_url: geocoding_url.into(),
            weather_url: weather_url.into(),
            timeout_seconds: 10,
            connect_timeout_seconds: 3,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// The API key and both endpoint URLs are required; timeouts fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required("OPENWEATHER_API_KEY")?;
        let geocoding_url = required_url("OPENWEATHER_GEOCODING_URL")?;
        let weather_url = required_url("OPENWEATHER_WEATHER_URL")?;

        let timeout_seconds = optional_seconds("OPENWEATHER_TIMEOUT_SECONDS", 10)?;
        let connect_timeout_seconds = optional_seconds("OPENWEATHER_CONNECT_TIMEOUT_SECONDS", 3)?;

        Ok(Self {
            api_key,
            geocoding_url,
            weather_url,
            timeout_seconds,
            connect_timeout_seconds,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn required_url(var: &'static str) -> Result<String, ConfigError> {
    let value = required(var)?;
    url::Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
        var,
        value: value.clone(),
    })?;
    Ok(value)
}

fn optional_seconds(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seconds) if seconds > 0 => Ok(seconds),
            _ => Err(ConfigError::InvalidNumber { var, value }),
        },
        Err(_) => Ok(default),
    }
}
