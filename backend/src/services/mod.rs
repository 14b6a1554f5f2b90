//! Business logic services for the Fertilizer Advisor

pub mod predictor;
pub mod rainfall;
pub mod recommendation;

pub use predictor::{RecommendationPredictor, Regressor};
pub use rainfall::RainfallResolver;
pub use recommendation::RecommendationService;
