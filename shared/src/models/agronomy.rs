//! Crop and soil models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::validation::ValidationError;

/// Crops the fertilizer model was trained on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crop {
    Rice,
    Wheat,
    Millets,
    Cotton,
    Sugarcane,
}

impl Crop {
    pub const ALL: [Crop; 5] = [
        Crop::Rice,
        Crop::Wheat,
        Crop::Millets,
        Crop::Cotton,
        Crop::Sugarcane,
    ];

    /// Category label used by the model artifact
    pub fn label(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Millets => "Millets",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Crop {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Crop::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnsupportedValue {
                field: "crop",
                value: wanted.to_string(),
            })
    }
}

/// Soil classes the fertilizer model was trained on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Black,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Clay,
        SoilType::Loam,
        SoilType::Sandy,
        SoilType::Black,
    ];

    /// Category label used by the model artifact
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Sandy => "Sandy",
            SoilType::Black => "Black",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SoilType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SoilType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnsupportedValue {
                field: "soil_type",
                value: wanted.to_string(),
            })
    }
}

/// Typed agronomic inputs for one recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgronomicInput {
    pub crop: Crop,
    pub soil_type: SoilType,
    pub soil_ph: f64,
}

impl AgronomicInput {
    pub fn new(crop: Crop, soil_type: SoilType, soil_ph: f64) -> Self {
        Self {
            crop,
            soil_type,
            soil_ph,
        }
    }
}
