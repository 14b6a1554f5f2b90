//! Fertilizer model artifact
//!
//! Loads the pre-trained multi-output regressor from its serialized JSON
//! form. Categorical features are one-hot encoded, so each output carries one
//! coefficient per crop and per soil type plus one per numeric feature.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::{FeatureRecord, FEATURE_COLUMNS, TARGET_NAMES};

use crate::error::PredictionError;
use crate::services::predictor::Regressor;

/// Serialized model as written by the training pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub target_names: Vec<String>,
    pub outputs: Vec<OutputCoefficients>,
}

/// Coefficients for one target (compost, N, P or K)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputCoefficients {
    pub intercept: f64,
    pub crop: HashMap<String, f64>,
    pub soil_type: HashMap<String, f64>,
    pub rainfall_mm: f64,
    pub soil_ph: f64,
}

impl OutputCoefficients {
    fn evaluate(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let crop = self.crop.get(record.crop.label()).ok_or_else(|| {
            PredictionError::ModelUnavailable(format!(
                "no coefficient for crop {}",
                record.crop
            ))
        })?;
        let soil = self.soil_type.get(record.soil_type.label()).ok_or_else(|| {
            PredictionError::ModelUnavailable(format!(
                "no coefficient for soil type {}",
                record.soil_type
            ))
        })?;

        Ok(self.intercept
            + crop
            + soil
            + self.rainfall_mm * record.rainfall_mm
            + self.soil_ph * record.soil_ph)
    }
}

/// Multi-output linear regressor over one-hot encoded features
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    outputs: [OutputCoefficients; 4],
}

impl LinearRegressor {
    /// Check the artifact against the feature and target contract
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictionError> {
        if artifact.feature_names != FEATURE_COLUMNS {
            return Err(PredictionError::ModelUnavailable(format!(
                "model expects features {:?}, engine provides {:?}",
                artifact.feature_names, FEATURE_COLUMNS
            )));
        }
        if artifact.target_names != TARGET_NAMES {
            return Err(PredictionError::ModelUnavailable(format!(
                "model predicts {:?}, engine expects {:?}",
                artifact.target_names, TARGET_NAMES
            )));
        }

        let count = artifact.outputs.len();
        let outputs: [OutputCoefficients; 4] = artifact.outputs.try_into().map_err(|_| {
            PredictionError::ModelUnavailable(format!("model has {} outputs, expected 4", count))
        })?;

        Ok(Self { outputs })
    }

    /// Read and check a model file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        tracing::debug!("Loading fertilizer model from: {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| {
            PredictionError::ModelUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw).map_err(|e| {
            PredictionError::ModelUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;

        Self::from_artifact(artifact)
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, record: &FeatureRecord) -> Result<[f64; 4], PredictionError> {
        let mut out = [0.0; 4];
        for (slot, coefficients) in out.iter_mut().zip(self.outputs.iter()) {
            *slot = coefficients.evaluate(record)?;
        }
        Ok(out)
    }
}
