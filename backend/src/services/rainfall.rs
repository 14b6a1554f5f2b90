//! Rainfall resolution
//!
//! Turns a city name into one rainfall figure. The provider reports rain in
//! two shapes (current conditions with optional 1h/3h accumulations, or a
//! list of 3-hour forecast blocks) and omits the field entirely when it is
//! dry. The policy below normalizes all of them.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{LocationQuery, RainfallObservation, RainfallSource};

use crate::config::RainfallMode;
use crate::error::RainfallError;

/// Rainfall substituted when the provider cannot be reached
pub const DEFAULT_RAINFALL_MM: f64 = 75.0;

/// Number of 3-hour forecast blocks that make up one day
pub const FORECAST_BLOCKS_PER_DAY: usize = 8;

/// Current conditions as reported by the provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentConditions {
    pub location_name: Option<String>,
    pub rain_1h_mm: Option<f64>,
    pub rain_3h_mm: Option<f64>,
}

/// One 3-hour forecast block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastBlock {
    pub rain_3h_mm: Option<f64>,
}

/// Forecast as reported by the provider, earliest block first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastReport {
    pub location_name: Option<String>,
    pub blocks: Vec<ForecastBlock>,
}

/// Source of raw weather documents
#[async_trait]
pub trait RainfallProvider: Send + Sync {
    async fn current_conditions(&self, city: &str) -> Result<CurrentConditions, RainfallError>;

    async fn forecast(&self, city: &str) -> Result<ForecastReport, RainfallError>;
}

/// Rainfall from current conditions.
///
/// A 1-hour accumulation is used as-is; otherwise a 3-hour accumulation is
/// divided by 3; otherwise there was no rain.
pub fn rainfall_from_current(conditions: &CurrentConditions) -> RainfallObservation {
    let value_mm = match (conditions.rain_1h_mm, conditions.rain_3h_mm) {
        (Some(one_hour), _) => one_hour,
        (None, Some(three_hour)) => three_hour / 3.0,
        (None, None) => 0.0,
    };
    RainfallObservation::new(value_mm, RainfallSource::CurrentWeather)
}

/// Rainfall summed over the first day of forecast blocks.
///
/// Blocks without a rain field count as 0.
pub fn rainfall_from_forecast(report: &ForecastReport) -> RainfallObservation {
    let value_mm = report
        .blocks
        .iter()
        .take(FORECAST_BLOCKS_PER_DAY)
        .filter_map(|b| b.rain_3h_mm)
        .filter(|mm| mm.is_finite() && *mm > 0.0)
        .sum::<f64>();
    RainfallObservation::new(value_mm, RainfallSource::ForecastAggregate)
}

/// Resolves a location into a rainfall observation
#[derive(Clone)]
pub struct RainfallResolver {
    provider: Arc<dyn RainfallProvider>,
    mode: RainfallMode,
}

impl RainfallResolver {
    pub fn new(provider: Arc<dyn RainfallProvider>, mode: RainfallMode) -> Self {
        Self { provider, mode }
    }

    pub fn mode(&self) -> RainfallMode {
        self.mode
    }

    /// One best-effort provider call; no retries.
    ///
    /// A blank location resolves to zero rainfall without contacting the
    /// provider.
    pub async fn resolve(
        &self,
        location: &LocationQuery,
    ) -> Result<RainfallObservation, RainfallError> {
        if location.is_blank() {
            tracing::debug!("Blank location, assuming no rainfall");
            return Ok(RainfallObservation::new(0.0, RainfallSource::CurrentWeather));
        }

        let observation = match self.mode {
            RainfallMode::Current => {
                let conditions = self.provider.current_conditions(location.as_str()).await?;
                rainfall_from_current(&conditions)
            }
            RainfallMode::Forecast => {
                let report = self.provider.forecast(location.as_str()).await?;
                rainfall_from_forecast(&report)
            }
        };

        tracing::debug!(
            "Resolved rainfall for '{}': {} mm ({})",
            location,
            observation.value_mm(),
            observation.source()
        );
        Ok(observation)
    }
}
