use serde::{Deserialize, Serialize};

/// Normalized snapshot of a location's current weather.
///
/// `temperature_min_c <= temperature_c <= temperature_max_c` is not
/// guaranteed by the source data; values are passed through as supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location_name: String,
    pub temperature_c: f64,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// Coarse category token, e.g. "Rain" or "Clear"
    pub condition_label: String,
    /// Fine-grained free text, display only
    pub condition_description: String,
}

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}
