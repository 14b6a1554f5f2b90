//! Weather API client for fetching rainfall data
//!
//! Integrates with the OpenWeatherMap API for current conditions and
//! 3-hour forecasts, queried by city name.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult, RainfallError};
use crate::services::rainfall::{CurrentConditions, ForecastBlock, ForecastReport, RainfallProvider};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather.
///
/// Only the fields the advisor reads; everything else is ignored.
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    name: Option<String>,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: Option<OWMCity>,
    #[serde(default)]
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    rain: Option<OWMForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, RainfallError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RainfallError::ProviderUnavailable("Weather API request timed out".to_string())
                } else {
                    RainfallError::ProviderUnavailable(format!("Weather API request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Weather API returned {} for '{}': {}", status, city, body);
            return Err(classify_status(status, city));
        }

        response.json::<T>().await.map_err(|e| {
            RainfallError::ProviderUnavailable(format!("Failed to parse weather response: {}", e))
        })
    }
}

/// Map a non-2xx provider status onto the rainfall error taxonomy.
///
/// Client errors mean the city was not resolved, except for auth and rate
/// limiting which are provider-side problems.
fn classify_status(status: StatusCode, city: &str) -> RainfallError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            RainfallError::ProviderUnavailable(format!("Weather API error: {}", status))
        }
        s if s.is_client_error() => RainfallError::LocationNotFound(city.to_string()),
        s => RainfallError::ProviderUnavailable(format!("Weather API error: {}", s)),
    }
}

impl From<OWMCurrentResponse> for CurrentConditions {
    fn from(data: OWMCurrentResponse) -> Self {
        CurrentConditions {
            location_name: data.name,
            rain_1h_mm: data.rain.as_ref().and_then(|r| r.one_hour),
            rain_3h_mm: data.rain.as_ref().and_then(|r| r.three_hour),
        }
    }
}

impl From<OWMForecastResponse> for ForecastReport {
    fn from(data: OWMForecastResponse) -> Self {
        ForecastReport {
            location_name: data.city.and_then(|c| c.name),
            blocks: data
                .list
                .into_iter()
                .map(|item| ForecastBlock {
                    rain_3h_mm: item.rain.and_then(|r| r.three_hour),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl RainfallProvider for WeatherClient {
    async fn current_conditions(&self, city: &str) -> Result<CurrentConditions, RainfallError> {
        let data: OWMCurrentResponse = self.get_json("weather", city).await?;
        Ok(data.into())
    }

    async fn forecast(&self, city: &str) -> Result<ForecastReport, RainfallError> {
        let data: OWMForecastResponse = self.get_json("forecast", city).await?;
        Ok(data.into())
    }
}
