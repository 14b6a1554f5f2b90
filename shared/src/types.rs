//! Common types used across the advisor

use serde::{Deserialize, Serialize};

/// Lowest soil pH the model was trained on
pub const SOIL_PH_MIN: f64 = 4.5;

/// Highest soil pH the model was trained on
pub const SOIL_PH_MAX: f64 = 9.0;

/// City name used to look up rainfall.
///
/// Opaque to the engine; the weather provider decides whether it resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for LocationQuery {
    fn from(location: &str) -> Self {
        Self::new(location)
    }
}

/// Inclusive soil pH bounds, published to form builders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilPhRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SoilPhRange {
    fn default() -> Self {
        Self {
            min: SOIL_PH_MIN,
            max: SOIL_PH_MAX,
        }
    }
}

impl SoilPhRange {
    pub fn contains(&self, ph: f64) -> bool {
        ph.is_finite() && ph >= self.min && ph <= self.max
    }
}
