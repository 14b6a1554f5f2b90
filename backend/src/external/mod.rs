//! External integrations: the weather API and the model artifact

pub mod model;
pub mod weather;

pub use model::LinearRegressor;
pub use weather::WeatherClient;
