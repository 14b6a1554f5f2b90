//! Fertilizer recommendation models

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Order of the regressor's outputs
pub const TARGET_NAMES: [&str; 4] = ["compost", "nitrogen", "phosphorus", "potassium"];

/// Compost and NPK dosage for one field, all figures in kg per acre
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub compost_kg_per_acre: f64,
    pub nitrogen_kg_per_acre: f64,
    pub phosphorus_kg_per_acre: f64,
    pub potassium_kg_per_acre: f64,
}

impl Recommendation {
    /// Build from raw regressor output in `TARGET_NAMES` order, rounding each
    /// figure to 2 decimal places. Negative figures are kept as-is.
    pub fn from_outputs(outputs: [f64; 4]) -> Self {
        let [compost, nitrogen, phosphorus, potassium] = outputs.map(round_kg);
        Self {
            compost_kg_per_acre: compost,
            nitrogen_kg_per_acre: nitrogen,
            phosphorus_kg_per_acre: phosphorus,
            potassium_kg_per_acre: potassium,
        }
    }

    /// Same figures with negatives raised to zero
    pub fn clamped(self) -> Self {
        Self {
            compost_kg_per_acre: self.compost_kg_per_acre.max(0.0),
            nitrogen_kg_per_acre: self.nitrogen_kg_per_acre.max(0.0),
            phosphorus_kg_per_acre: self.phosphorus_kg_per_acre.max(0.0),
            potassium_kg_per_acre: self.potassium_kg_per_acre.max(0.0),
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.compost_kg_per_acre,
            self.nitrogen_kg_per_acre,
            self.phosphorus_kg_per_acre,
            self.potassium_kg_per_acre,
        ]
    }
}

/// Round a dosage to 2 decimal places, midpoint away from zero
pub fn round_kg(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_kg() {
        assert_eq!(round_kg(12.3456), 12.35);
        assert_eq!(round_kg(12.3449), 12.34);
        assert_eq!(round_kg(40.0), 40.0);
        assert_eq!(round_kg(-3.456), -3.46);
    }

    #[test]
    fn test_from_outputs_keeps_order() {
        let rec = Recommendation::from_outputs([1500.123, 45.678, 20.001, 30.999]);
        assert_eq!(rec.compost_kg_per_acre, 1500.12);
        assert_eq!(rec.nitrogen_kg_per_acre, 45.68);
        assert_eq!(rec.phosphorus_kg_per_acre, 20.0);
        assert_eq!(rec.potassium_kg_per_acre, 31.0);
    }

    #[test]
    fn test_negative_outputs_preserved_until_clamped() {
        let rec = Recommendation::from_outputs([-1.5, 2.0, 3.0, -0.004]);
        assert_eq!(rec.compost_kg_per_acre, -1.5);
        // -0.004 rounds to -0.00, which compares equal to zero
        assert_eq!(rec.potassium_kg_per_acre, 0.0);

        let clamped = rec.clamped();
        assert_eq!(clamped.as_array(), [0.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(round_kg(f64::NAN).is_nan());
    }
}
