//! Rainfall observation models

use serde::{Deserialize, Serialize};

/// Where a rainfall figure came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallSource {
    /// Current conditions reading (1h or 3h accumulation)
    CurrentWeather,
    /// Sum of the first 24h of 3-hour forecast blocks
    ForecastAggregate,
    /// Substituted value, not measured for this location
    Fallback,
}

impl std::fmt::Display for RainfallSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainfallSource::CurrentWeather => write!(f, "Current Weather"),
            RainfallSource::ForecastAggregate => write!(f, "Forecast Aggregate"),
            RainfallSource::Fallback => write!(f, "Fallback"),
        }
    }
}

/// A single rainfall figure resolved for one request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawRainfallObservation")]
pub struct RainfallObservation {
    value_mm: f64,
    source: RainfallSource,
}

#[derive(Deserialize)]
struct RawRainfallObservation {
    value_mm: f64,
    source: RainfallSource,
}

impl From<RawRainfallObservation> for RainfallObservation {
    fn from(raw: RawRainfallObservation) -> Self {
        Self::new(raw.value_mm, raw.source)
    }
}

impl RainfallObservation {
    /// Negative and non-finite readings are recorded as no rain.
    pub fn new(value_mm: f64, source: RainfallSource) -> Self {
        let value_mm = if value_mm.is_finite() && value_mm > 0.0 {
            value_mm
        } else {
            0.0
        };
        Self { value_mm, source }
    }

    pub fn fallback(value_mm: f64) -> Self {
        Self::new(value_mm, RainfallSource::Fallback)
    }

    pub fn value_mm(&self) -> f64 {
        self.value_mm
    }

    pub fn source(&self) -> RainfallSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RainfallSource::Fallback
    }
}
