//! HTTP handlers for the Fertilizer Advisor

mod health;
mod recommendation;

pub use health::health_check;
pub use recommendation::{create_recommendation, get_options, get_rainfall};
