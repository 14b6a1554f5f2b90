//! Input validation for the Fertilizer Advisor
//!
//! Runs before any weather lookup or model call. Every check is a pure
//! predicate over already-typed values.

use thiserror::Error;

use crate::models::{AgronomicInput, Crop, SoilType};
use crate::types::{LocationQuery, SoilPhRange, SOIL_PH_MAX, SOIL_PH_MIN};

/// Reasons an agronomic request is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unsupported {field}: {value}")]
    UnsupportedValue { field: &'static str, value: String },

    #[error("Soil pH {value} is outside {min}-{max}", min = SOIL_PH_MIN, max = SOIL_PH_MAX)]
    OutOfRangePH { value: f64 },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => *field,
            ValidationError::UnsupportedValue { field, .. } => *field,
            ValidationError::OutOfRangePH { .. } => "soil_ph",
        }
    }
}

// ============================================================================
// Field Validations
// ============================================================================

/// Trimmed text, or `MissingField` when absent or blank
pub fn require_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Parse a crop selection
pub fn parse_crop(value: Option<&str>) -> Result<Crop, ValidationError> {
    require_text("crop", value)?.parse()
}

/// Parse a soil type selection
pub fn parse_soil_type(value: Option<&str>) -> Result<SoilType, ValidationError> {
    require_text("soil_type", value)?.parse()
}

/// Soil pH must lie in [4.5, 9.0], bounds inclusive
pub fn validate_soil_ph(soil_ph: f64) -> Result<(), ValidationError> {
    if SoilPhRange::default().contains(soil_ph) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRangePH { value: soil_ph })
    }
}

/// Location must be non-blank; anything else is left to the weather provider
pub fn validate_location(location: &LocationQuery) -> Result<(), ValidationError> {
    if location.is_blank() {
        return Err(ValidationError::MissingField { field: "location" });
    }
    Ok(())
}

/// Gate for the recommendation pipeline
pub fn validate(input: &AgronomicInput, location: &LocationQuery) -> Result<(), ValidationError> {
    validate_location(location)?;
    validate_soil_ph(input.soil_ph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationRequest;
    use proptest::prelude::*;

    fn request(crop: &str, soil: &str, ph: f64, location: &str) -> RecommendationRequest {
        RecommendationRequest {
            crop: Some(crop.to_string()),
            soil_type: Some(soil.to_string()),
            soil_ph: Some(ph),
            location: Some(location.to_string()),
        }
    }

    #[test]
    fn test_validate_soil_ph_bounds_inclusive() {
        assert!(validate_soil_ph(4.5).is_ok());
        assert!(validate_soil_ph(9.0).is_ok());
        assert!(validate_soil_ph(6.5).is_ok());
    }

    #[test]
    fn test_validate_soil_ph_out_of_range() {
        assert_eq!(
            validate_soil_ph(4.49),
            Err(ValidationError::OutOfRangePH { value: 4.49 })
        );
        assert!(validate_soil_ph(9.01).is_err());
        assert!(validate_soil_ph(f64::NAN).is_err());
        assert!(validate_soil_ph(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location(&LocationQuery::from("Pune")).is_ok());
        assert_eq!(
            validate_location(&LocationQuery::from("   ")),
            Err(ValidationError::MissingField { field: "location" })
        );
    }

    #[test]
    fn test_valid_request() {
        let (input, location) = request("Rice", "Loam", 6.5, "Pune").validate().unwrap();
        assert_eq!(input, AgronomicInput::new(Crop::Rice, SoilType::Loam, 6.5));
        assert_eq!(location.as_str(), "Pune");
    }

    #[test]
    fn test_missing_crop() {
        let mut req = request("Rice", "Loam", 6.5, "Pune");
        req.crop = None;
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::MissingField { field: "crop" }
        );
    }

    #[test]
    fn test_blank_soil_type() {
        let err = request("Rice", "  ", 6.5, "Pune").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "soil_type" });
    }

    #[test]
    fn test_missing_ph() {
        let mut req = request("Rice", "Loam", 6.5, "Pune");
        req.soil_ph = None;
        assert_eq!(req.validate().unwrap_err().field(), "soil_ph");
    }

    #[test]
    fn test_missing_location_wins_over_bad_ph() {
        let err = request("Rice", "Loam", 12.0, "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "location" });
    }

    #[test]
    fn test_unsupported_crop() {
        let err = request("Barley", "Loam", 6.5, "Pune").validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedValue {
                field: "crop",
                value: "Barley".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_ph_request() {
        let err = request("Wheat", "Clay", 3.9, "Delhi").validate().unwrap_err();
        assert_eq!(err, ValidationError::OutOfRangePH { value: 3.9 });
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfRangePH { value: 10.0 };
        assert_eq!(err.to_string(), "Soil pH 10 is outside 4.5-9");
        let err = ValidationError::MissingField { field: "crop" };
        assert_eq!(err.to_string(), "Missing required field: crop");
    }

    proptest! {
        #[test]
        fn prop_ph_inside_range_passes(ph in SOIL_PH_MIN..=SOIL_PH_MAX) {
            let input = AgronomicInput::new(Crop::Cotton, SoilType::Black, ph);
            prop_assert!(validate(&input, &LocationQuery::from("Nagpur")).is_ok());
        }

        #[test]
        fn prop_ph_below_range_fails(ph in -100.0f64..SOIL_PH_MIN) {
            prop_assert_eq!(
                validate_soil_ph(ph),
                Err(ValidationError::OutOfRangePH { value: ph })
            );
        }

        #[test]
        fn prop_ph_above_range_fails(ph in (SOIL_PH_MAX + 1e-9)..100.0f64) {
            let rejected = matches!(
                validate_soil_ph(ph),
                Err(ValidationError::OutOfRangePH { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_any_missing_field_is_reported(
            ph in -20.0f64..20.0,
            drop_crop in any::<bool>(),
            drop_soil in any::<bool>(),
            drop_location in any::<bool>(),
        ) {
            prop_assume!(drop_crop || drop_soil || drop_location);
            let req = RecommendationRequest {
                crop: (!drop_crop).then(|| "Rice".to_string()),
                soil_type: (!drop_soil).then(|| "Loam".to_string()),
                soil_ph: Some(ph),
                location: if drop_location { Some(String::new()) } else { Some("Pune".to_string()) },
            };
            prop_assert!(
                matches!(req.validate(), Err(ValidationError::MissingField { .. })),
                "expected MissingField"
            );
        }
    }
}
