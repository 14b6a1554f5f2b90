//! Error handling for the Fertilizer Advisor
//!
//! Domain errors for each pipeline stage, and the HTTP-facing `AppError`
//! that renders them as JSON.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ValidationError;
use thiserror::Error;

/// Failures of the rainfall lookup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RainfallError {
    /// The provider does not know the location. Not retried.
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Transport, status or decoding failure, timeouts included
    #[error("Weather provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Failures of the fertilizer regressor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // External service errors
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather service unavailable: {0}")]
    WeatherServiceUnavailable(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<RainfallError> for AppError {
    fn from(err: RainfallError) -> Self {
        match err {
            RainfallError::LocationNotFound(location) => AppError::LocationNotFound(location),
            RainfallError::ProviderUnavailable(msg) => AppError::WeatherServiceUnavailable(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::ModelUnavailable(msg) => AppError::ModelUnavailable(msg),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status and response body for this error
    pub fn detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation(err) => {
                let code = match err {
                    ValidationError::MissingField { .. } => "MISSING_FIELD",
                    ValidationError::UnsupportedValue { .. } => "UNSUPPORTED_VALUE",
                    ValidationError::OutOfRangePH { .. } => "OUT_OF_RANGE_PH",
                };
                (
                    StatusCode::BAD_REQUEST,
                    ErrorDetail {
                        code: code.to_string(),
                        message: err.to_string(),
                        field: Some(err.field().to_string()),
                    },
                )
            }
            AppError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_BODY".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::LocationNotFound(location) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "LOCATION_NOT_FOUND".to_string(),
                    message: format!(
                        "Could not find weather data for '{}'. Check the city name and try again.",
                        location
                    ),
                    field: Some("location".to_string()),
                },
            ),
            AppError::WeatherServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message: "Weather service is temporarily unavailable".to_string(),
                    field: None,
                },
            ),
            AppError::ModelUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "MODEL_UNAVAILABLE".to_string(),
                    message: format!("Model unavailable: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.detail();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
