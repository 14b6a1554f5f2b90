//! HTTP handlers for fertilizer recommendations

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{
    LocationQuery, OptionsResponse, RainfallResponse, RecommendationRequest,
    RecommendationResponse,
};
use crate::AppState;

/// Compute a compost and NPK recommendation
pub async fn create_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        crop = ?request.crop,
        soil_type = ?request.soil_type,
        "Recommendation requested"
    );

    let outcome = state.recommendations.recommend_request(&request).await?;

    tracing::info!(
        %request_id,
        rainfall_mm = outcome.rainfall.value_mm(),
        rainfall_source = %outcome.rainfall.source(),
        "Recommendation produced"
    );
    Ok(Json(RecommendationResponse::new(request_id, outcome)))
}

/// Query parameters for rainfall lookup
#[derive(Debug, Deserialize)]
pub struct RainfallQuery {
    pub location: Option<String>,
}

/// Resolve rainfall for a location, surfacing provider errors as-is
pub async fn get_rainfall(
    State(state): State<AppState>,
    Query(query): Query<RainfallQuery>,
) -> AppResult<Json<RainfallResponse>> {
    let location = LocationQuery::new(query.location.unwrap_or_default());
    shared::validate_location(&location)?;

    let rainfall = state.recommendations.resolve_rainfall(&location).await?;
    Ok(Json(RainfallResponse { location, rainfall }))
}

/// Choices for building the input form
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse::default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::config::{Config, ModelConfig, RainfallMode, ServerConfig, WeatherConfig};
    use crate::error::RainfallError;
    use crate::routes::api_routes;
    use crate::services::predictor::testing::FixedRegressor;
    use crate::services::rainfall::testing::StubProvider;
    use crate::services::rainfall::CurrentConditions;
    use crate::services::{
        RainfallResolver, RecommendationPredictor, RecommendationService, Regressor,
    };
    use crate::AppState;

    fn app(provider: StubProvider) -> Router {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            model: ModelConfig::default(),
        };
        let recommendations = RecommendationService::new(
            RainfallResolver::new(Arc::new(provider), RainfallMode::Current),
            RecommendationPredictor::new(
                Some(Arc::new(FixedRegressor::new([1200.0, 48.0, 22.5, 30.0])) as Arc<dyn Regressor>),
                false,
            ),
            true,
        );
        api_routes().with_state(AppState {
            config: Arc::new(config),
            recommendations,
        })
    }

    fn drizzle() -> StubProvider {
        StubProvider::current(CurrentConditions {
            location_name: Some("Pune".to_string()),
            rain_1h_mm: Some(0.8),
            rain_3h_mm: None,
        })
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/recommendations")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_recommendation() {
        let response = app(drizzle())
            .oneshot(post(
                r#"{"crop":"Rice","soil_type":"Loam","soil_ph":6.5,"location":"Pune"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["recommendation"]["compost_kg_per_acre"], 1200.0);
        assert_eq!(body["features"]["rainfall_mm"], 0.8);
        assert_eq!(body["rainfall"]["source"], "current_weather");
    }

    #[tokio::test]
    async fn test_post_out_of_range_ph() {
        let response = app(drizzle())
            .oneshot(post(
                r#"{"crop":"Rice","soil_type":"Loam","soil_ph":3.0,"location":"Pune"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "OUT_OF_RANGE_PH");
    }

    #[tokio::test]
    async fn test_post_blank_ph_is_missing_field() {
        let provider = drizzle();
        let response = app(provider)
            .oneshot(post(
                r#"{"crop":"Rice","soil_type":"Loam","soil_ph":"","location":"Pune"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
        assert_eq!(body["error"]["field"], "soil_ph");
    }

    #[tokio::test]
    async fn test_post_malformed_body_is_json_error() {
        let response = app(drizzle())
            .oneshot(post(
                r#"{"crop":"Rice","soil_type":"Loam","soil_ph":"acidic","location":"Pune"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_post_unknown_location() {
        let provider = StubProvider::failing(RainfallError::LocationNotFound("Nowhere".into()));
        let response = app(provider)
            .oneshot(post(
                r#"{"crop":"Cotton","soil_type":"Black","soil_ph":7.5,"location":"Nowhere"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "LOCATION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_rainfall_requires_location() {
        let response = app(drizzle())
            .oneshot(Request::builder().uri("/rainfall").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
    }

    #[tokio::test]
    async fn test_get_rainfall() {
        let response = app(drizzle())
            .oneshot(
                Request::builder()
                    .uri("/rainfall?location=Pune")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["location"], "Pune");
        assert_eq!(body["rainfall"]["value_mm"], 0.8);
    }

    #[tokio::test]
    async fn test_get_rainfall_outage_is_not_masked() {
        let provider = StubProvider::failing(RainfallError::ProviderUnavailable("down".into()));
        let response = app(provider)
            .oneshot(
                Request::builder()
                    .uri("/rainfall?location=Pune")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
