//! Domain models for the Fertilizer Advisor

mod agronomy;
mod rainfall;
mod recommendation;
mod request;

pub use agronomy::*;
pub use rainfall::*;
pub use recommendation::*;
pub use request::*;
