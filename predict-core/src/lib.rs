//! Core library for the `weather-predict` CLI.
//!
//! This crate defines:
//! - Configuration of the service endpoints
//! - Open-Meteo geocoding and current-weather clients behind small traits
//! - Shared domain models and the prediction step
//!
//! It is used by `predict-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod prediction;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use model::{CurrentWeather, Location, PredictionResult};
pub use prediction::predict;
pub use provider::{Geocoder, OpenMeteoForecast, OpenMeteoGeocoder, WeatherSource};
