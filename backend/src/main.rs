//! Fertilizer Advisor - Backend Server
//!
//! Recommends compost and NPK dosages from crop, soil type, soil pH and the
//! rainfall reported for the farmer's location.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::{LinearRegressor, WeatherClient};
use services::{RainfallResolver, RecommendationPredictor, RecommendationService, Regressor};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommendations: RecommendationService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fa_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Fertilizer Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the model once; requests share it read-only
    let model: Option<Arc<dyn Regressor>> = match LinearRegressor::load(&config.model.path) {
        Ok(model) => {
            tracing::info!("Fertilizer model loaded from {}", config.model.path);
            Some(Arc::new(model) as Arc<dyn Regressor>)
        }
        Err(e) => {
            tracing::error!("Fertilizer model unavailable, recommendations will fail: {}", e);
            None
        }
    };

    if config.weather.api_key.is_empty() {
        tracing::warn!("No weather API key configured (FA__WEATHER__API_KEY)");
    }
    let weather = WeatherClient::new(&config.weather)?;

    let resolver = RainfallResolver::new(Arc::new(weather), config.weather.mode);
    tracing::info!("Rainfall source: {:?}", resolver.mode());

    let recommendations = RecommendationService::new(
        resolver,
        RecommendationPredictor::new(model, config.model.clamp_negative),
        config.weather.fallback_on_unavailable,
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        recommendations,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Fertilizer Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
