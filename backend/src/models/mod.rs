//! API models for the Fertilizer Advisor
//!
//! Re-exports models from the shared crate and adds backend-specific models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub use shared::models::*;
pub use shared::{FeatureRecord, LocationQuery, SoilPhRange};

use crate::services::recommendation::RecommendationOutcome;

/// Body of a successful recommendation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub request_id: Uuid,
    pub recommendation: Recommendation,
    pub features: FeatureRecord,
    pub rainfall: RainfallObservation,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResponse {
    pub fn new(request_id: Uuid, outcome: RecommendationOutcome) -> Self {
        Self {
            request_id,
            recommendation: outcome.recommendation,
            features: outcome.features,
            rainfall: outcome.rainfall,
            generated_at: Utc::now(),
        }
    }
}

/// Body of a rainfall lookup
#[derive(Debug, Clone, Serialize)]
pub struct RainfallResponse {
    pub location: LocationQuery,
    pub rainfall: RainfallObservation,
}

/// Choices a client needs to build the input form
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub crops: Vec<Crop>,
    pub soil_types: Vec<SoilType>,
    pub soil_ph: SoilPhRange,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self {
            crops: Crop::ALL.to_vec(),
            soil_types: SoilType::ALL.to_vec(),
            soil_ph: SoilPhRange::default(),
        }
    }
}
