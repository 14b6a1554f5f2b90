//! Route definitions for the Fertilizer Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/options", get(handlers::get_options))
        .route("/rainfall", get(handlers::get_rainfall))
        .route("/recommendations", post(handlers::create_recommendation))
}
