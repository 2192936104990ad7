//! Weather collaborator for Clima
//!
//! Fetches current conditions for a named city from an OpenWeather-compatible
//! REST endpoint and normalizes them into a `WeatherObservation`.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::{WeatherError, WeatherObservation};
