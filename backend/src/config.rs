//! Configuration management for the Fertilizer Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FA_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Fertilizer model configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Upper bound on a whole request, weather lookup included
    #[validate(range(min = 1, max = 120))]
    pub request_timeout_secs: u64,
}

/// Which upstream document rainfall is read from
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RainfallMode {
    /// Current conditions (`rain.1h` / `rain.3h`)
    Current,
    /// 3-hour forecast blocks summed over the next 24 hours
    Forecast,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct WeatherConfig {
    /// Weather API endpoint
    #[validate(url)]
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,

    pub mode: RainfallMode,

    /// Timeout for the single outbound weather call
    #[validate(range(min = 1, max = 10))]
    pub timeout_secs: u64,

    /// Substitute the default rainfall when the provider is unreachable
    pub fallback_on_unavailable: bool,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ModelConfig {
    /// Path to the serialized regressor
    #[validate(length(min = 1))]
    pub path: String,

    /// Raise negative dosages to zero
    pub clamp_negative: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 15)?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default("weather.mode", "current")?
            .set_default("weather.timeout_secs", 10)?
            .set_default("weather.fallback_on_unavailable", true)?
            .set_default("model.path", "models/fertilizer_model.json")?
            .set_default("model.clamp_negative", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FA_ prefix)
            .add_source(
                Environment::with_prefix("FA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Range and format checks that serde cannot express
    pub fn check(&self) -> Result<(), ConfigError> {
        self.server
            .validate()
            .map_err(|e| ConfigError::Message(format!("server: {}", e)))?;
        self.weather
            .validate()
            .map_err(|e| ConfigError::Message(format!("weather: {}", e)))?;
        self.model
            .validate()
            .map_err(|e| ConfigError::Message(format!("model: {}", e)))?;
        Ok(())
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: String::new(),
            mode: RainfallMode::Current,
            timeout_secs: 10,
            fallback_on_unavailable: true,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "models/fertilizer_model.json".to_string(),
            clamp_negative: false,
        }
    }
}
