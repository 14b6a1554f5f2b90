//! Shared types and models for the Fertilizer Advisor
//!
//! This crate contains the domain types, input validation and feature
//! construction shared between the backend and the browser (via WASM).

pub mod features;
pub mod models;
pub mod types;
pub mod validation;

pub use features::*;
pub use models::*;
pub use types::*;
pub use validation::*;
