//! WebAssembly module for the Fertilizer Advisor
//!
//! Provides client-side helpers for the recommendation form:
//! - Crop and soil type choices
//! - Offline input validation before the request is sent
//! - Dosage rounding for display

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str("Fertilizer Advisor WASM ready"));
}

/// Crop names accepted by the server
#[wasm_bindgen]
pub fn crop_options() -> js_sys::Array {
    Crop::ALL
        .iter()
        .map(|c| JsValue::from_str(c.label()))
        .collect()
}

/// Soil type names accepted by the server
#[wasm_bindgen]
pub fn soil_type_options() -> js_sys::Array {
    SoilType::ALL
        .iter()
        .map(|s| JsValue::from_str(s.label()))
        .collect()
}

#[wasm_bindgen]
pub fn soil_ph_min() -> f64 {
    SOIL_PH_MIN
}

#[wasm_bindgen]
pub fn soil_ph_max() -> f64 {
    SOIL_PH_MAX
}

/// Check a soil pH reading against the accepted range
#[wasm_bindgen]
pub fn is_valid_soil_ph(soil_ph: f64) -> bool {
    validate_soil_ph(soil_ph).is_ok()
}

/// Validate a recommendation request given as JSON.
///
/// Returns `undefined` when the request is acceptable, otherwise the name of
/// the first offending field.
#[wasm_bindgen]
pub fn validate_request(request_json: &str) -> Result<Option<String>, JsValue> {
    let request: RecommendationRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    Ok(request.validate().err().map(|e| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        e.field().to_string()
    }))
}

/// Round a dosage to 2 decimal places, as the server does
#[wasm_bindgen]
pub fn round_dosage(kg_per_acre: f64) -> f64 {
    round_kg(kg_per_acre)
}
