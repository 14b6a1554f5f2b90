//! Boundary request model
//!
//! Raw form/JSON input before it is coerced into typed domain values.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::models::{AgronomicInput, Crop, SoilType};
use crate::types::LocationQuery;
use crate::validation::{require_text, validate, ValidationError};

/// Recommendation request as submitted by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub crop: Option<String>,
    pub soil_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_ph")]
    pub soil_ph: Option<f64>,
    pub location: Option<String>,
}

/// pH as sent by a form: a number, a numeric string, or blank
#[derive(Deserialize)]
#[serde(untagged)]
enum PhInput {
    Number(f64),
    Text(String),
}

/// Blank strings and null read as a missing pH.
fn lenient_ph<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PhInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PhInput::Number(value)) => Ok(Some(value)),
        Some(PhInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("soil_ph is not a number: '{}'", text)))
        }
    }
}

impl RecommendationRequest {
    /// Coerce into typed inputs.
    ///
    /// Missing fields are reported before unsupported values, and both before
    /// the pH range check.
    pub fn validate(&self) -> Result<(AgronomicInput, LocationQuery), ValidationError> {
        let crop = require_text("crop", self.crop.as_deref())?;
        let soil_type = require_text("soil_type", self.soil_type.as_deref())?;
        let soil_ph = self
            .soil_ph
            .ok_or(ValidationError::MissingField { field: "soil_ph" })?;
        let location = require_text("location", self.location.as_deref())?;

        let input = AgronomicInput::new(crop.parse::<Crop>()?, soil_type.parse::<SoilType>()?, soil_ph);
        let location = LocationQuery::new(location);
        validate(&input, &location)?;
        Ok((input, location))
    }
}
