//! HTTP client for the current-weather endpoint.

use crate::types::{WeatherError, WeatherObservation};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for an OpenWeather-compatible REST endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
    lang: String,
}

impl WeatherClient {
    /// Client against the default endpoint.
    pub fn new(
        api_key: impl Into<String>,
        lang: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, lang)
    }

    /// Client against a specific endpoint, used by tests and config overrides.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        lang: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            lang: lang.into(),
        })
    }

    /// Fetch current weather for a city, metric units.
    ///
    /// Any non-2xx response is reported as `CityNotFound`; no retry is made.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Weather request for {:?} returned status {}", city, status);
            return Err(WeatherError::CityNotFound(city.to_string()));
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::info!("Fetched current weather for {}", body.name);
        Ok(body.into_observation())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    main: MainReadings,
    #[serde(default)]
    weather: Vec<ConditionEntry>,
    wind: WindReadings,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
}

impl CurrentWeatherResponse {
    fn into_observation(self) -> WeatherObservation {
        // The weather array can be empty; an empty label still classifies.
        let (label, description) = self
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_default();

        WeatherObservation {
            location_name: self.name,
            temperature_c: self.main.temp,
            temperature_max_c: self.main.temp_max,
            temperature_min_c: self.main.temp_min,
            humidity_pct: self.main.humidity,
            wind_speed: self.wind.speed,
            condition_label: label,
            condition_description: description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> &'static str {
        r#"{
            "name": "São Paulo",
            "main": { "temp": 24.3, "temp_max": 27.0, "temp_min": 19.5, "humidity": 71 },
            "weather": [ { "main": "Clouds", "description": "nublado" } ],
            "wind": { "speed": 3.6 }
        }"#
    }

    #[test]
    fn test_payload_maps_to_observation() {
        let parsed: CurrentWeatherResponse = serde_json::from_str(sample_payload()).unwrap();
        let obs = parsed.into_observation();

        assert_eq!(obs.location_name, "São Paulo");
        assert_eq!(obs.temperature_c, 24.3);
        assert_eq!(obs.temperature_max_c, 27.0);
        assert_eq!(obs.temperature_min_c, 19.5);
        assert_eq!(obs.humidity_pct, 71);
        assert_eq!(obs.wind_speed, 3.6);
        assert_eq!(obs.condition_label, "Clouds");
        assert_eq!(obs.condition_description, "nublado");
    }

    #[test]
    fn test_empty_weather_array_yields_empty_label() {
        let json = r#"{
            "name": "Nowhere",
            "main": { "temp": 10.0, "temp_max": 10.0, "temp_min": 10.0, "humidity": 50 },
            "weather": [],
            "wind": { "speed": 0.0 }
        }"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        let obs = parsed.into_observation();

        assert_eq!(obs.condition_label, "");
        assert_eq!(obs.condition_description, "");
    }

    #[test]
    fn test_missing_weather_field_yields_empty_label() {
        let json = r#"{
            "name": "Nowhere",
            "main": { "temp": 10.0, "temp_max": 10.0, "temp_min": 10.0, "humidity": 50 },
            "wind": { "speed": 0.0 }
        }"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_observation().condition_label, "");
    }

    #[test]
    fn test_inverted_min_max_passes_through() {
        let json = r#"{
            "name": "Odd",
            "main": { "temp": 15.0, "temp_max": 10.0, "temp_min": 20.0, "humidity": 50 },
            "weather": [ { "main": "Clear", "description": "céu limpo" } ],
            "wind": { "speed": 1.0 }
        }"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        let obs = parsed.into_observation();

        assert_eq!(obs.temperature_max_c, 10.0);
        assert_eq!(obs.temperature_min_c, 20.0);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WeatherClient::with_base_url("http://localhost:9999/", "key", "pt_br")
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
