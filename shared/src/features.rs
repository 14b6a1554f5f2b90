//! Feature construction for the fertilizer regressor

use serde::{Deserialize, Serialize};

use crate::models::{AgronomicInput, Crop, RainfallObservation, SoilType};

/// Column names in the exact order the model artifact expects
pub const FEATURE_COLUMNS: [&str; 4] = ["crop", "soil_type", "rainfall_mm", "soil_ph"];

/// One row of model input.
///
/// Field order mirrors `FEATURE_COLUMNS` and must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    pub crop: Crop,
    pub soil_type: SoilType,
    pub rainfall_mm: f64,
    pub soil_ph: f64,
}

/// Combine validated inputs with the resolved rainfall
pub fn build_features(input: &AgronomicInput, rain: &RainfallObservation) -> FeatureRecord {
    FeatureRecord {
        crop: input.crop,
        soil_type: input.soil_type,
        rainfall_mm: rain.value_mm(),
        soil_ph: input.soil_ph,
    }
}
