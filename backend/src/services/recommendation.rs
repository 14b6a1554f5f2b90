//! Recommendation pipeline
//!
//! validate -> resolve rainfall -> build features -> predict. Each request
//! runs the stages in order and stops at the first definitive failure; no
//! partial recommendation is ever returned.

use serde::Serialize;
use shared::{
    build_features, validate, AgronomicInput, FeatureRecord, LocationQuery, RainfallObservation,
    Recommendation, RecommendationRequest,
};

use crate::error::{AppResult, RainfallError};
use crate::services::predictor::RecommendationPredictor;
use crate::services::rainfall::{RainfallResolver, DEFAULT_RAINFALL_MM};

/// Everything the pipeline produced for one request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationOutcome {
    pub recommendation: Recommendation,
    pub features: FeatureRecord,
    pub rainfall: RainfallObservation,
}

#[derive(Clone)]
pub struct RecommendationService {
    resolver: RainfallResolver,
    predictor: RecommendationPredictor,
    fallback_on_unavailable: bool,
}

impl RecommendationService {
    pub fn new(
        resolver: RainfallResolver,
        predictor: RecommendationPredictor,
        fallback_on_unavailable: bool,
    ) -> Self {
        Self {
            resolver,
            predictor,
            fallback_on_unavailable,
        }
    }

    pub fn predictor(&self) -> &RecommendationPredictor {
        &self.predictor
    }

    /// Rainfall for a location without any fallback substitution
    pub async fn resolve_rainfall(
        &self,
        location: &LocationQuery,
    ) -> Result<RainfallObservation, RainfallError> {
        self.resolver.resolve(location).await
    }

    /// Coerce a raw request and run the pipeline
    pub async fn recommend_request(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationOutcome> {
        let (input, location) = request.validate()?;
        self.recommend(&input, &location).await
    }

    /// Run the full pipeline for typed inputs
    pub async fn recommend(
        &self,
        input: &AgronomicInput,
        location: &LocationQuery,
    ) -> AppResult<RecommendationOutcome> {
        validate(input, location)?;

        let rainfall = match self.resolver.resolve(location).await {
            Ok(observation) => observation,
            // An unreachable provider does not fail the request: the model is
            // fed DEFAULT_RAINFALL_MM instead, and the observation is tagged
            // `Fallback` so callers can tell the figure was not measured.
            Err(RainfallError::ProviderUnavailable(reason)) if self.fallback_on_unavailable => {
                tracing::warn!(
                    "Weather provider unavailable for '{}' ({}), using default rainfall of {} mm",
                    location,
                    reason,
                    DEFAULT_RAINFALL_MM
                );
                RainfallObservation::fallback(DEFAULT_RAINFALL_MM)
            }
            Err(RainfallError::LocationNotFound(name)) => {
                tracing::info!("Location not found by weather provider: {}", name);
                return Err(RainfallError::LocationNotFound(name).into());
            }
            Err(e) => return Err(e.into()),
        };

        let features = build_features(input, &rainfall);
        let recommendation = self.predictor.predict(&features).map_err(|e| {
            tracing::error!("Prediction failed for {:?}: {}", features, e);
            e
        })?;

        Ok(RecommendationOutcome {
            recommendation,
            features,
            rainfall,
        })
    }
}
