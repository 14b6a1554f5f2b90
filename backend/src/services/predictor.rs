//! Recommendation predictor
//!
//! Wraps the loaded regressor and turns its raw 4-vector into a
//! `Recommendation`.

use std::sync::Arc;

use shared::{FeatureRecord, Recommendation};

use crate::error::PredictionError;

/// Opaque pre-trained model: four features in, [compost, N, P, K] out.
///
/// Shared read-only across concurrent requests.
pub trait Regressor: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<[f64; 4], PredictionError>;
}

#[derive(Clone)]
pub struct RecommendationPredictor {
    model: Option<Arc<dyn Regressor>>,
    clamp_negative: bool,
}

impl RecommendationPredictor {
    pub fn new(model: Option<Arc<dyn Regressor>>, clamp_negative: bool) -> Self {
        Self {
            model,
            clamp_negative,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<Recommendation, PredictionError> {
        let model = self.model.as_ref().ok_or_else(|| {
            PredictionError::ModelUnavailable("fertilizer model is not loaded".to_string())
        })?;

        let outputs = model.predict(record)?;
        if let Some(bad) = outputs.iter().find(|v| !v.is_finite()) {
            return Err(PredictionError::ModelUnavailable(format!(
                "model produced a non-finite dosage ({})",
                bad
            )));
        }

        let recommendation = Recommendation::from_outputs(outputs);
        if self.clamp_negative {
            Ok(recommendation.clamped())
        } else {
            Ok(recommendation)
        }
    }
}
