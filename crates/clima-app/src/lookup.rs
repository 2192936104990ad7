//! The weather lookup flow.
//!
//! One lookup runs: validate input → fetch current weather → classify →
//! best-effort history write → report. Overlapping lookups are independent;
//! callers that must guard against stale results use `LookupSequence`.

use clima_advisor::{classify, ClothingSuggestion};
use clima_auth::Session;
use clima_core::{AppError, LookupError, ValidationError};
use clima_history::{HistoryWriterHandle, NewHistoryRecord};
use clima_weather::{WeatherClient, WeatherError, WeatherObservation};

/// Result of a successful lookup, ready for display.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub observation: WeatherObservation,
    pub suggestion: ClothingSuggestion,
}

/// Orchestrates one weather lookup end to end.
pub struct WeatherLookupFlow {
    client: WeatherClient,
    history: Option<HistoryWriterHandle>,
}

impl WeatherLookupFlow {
    /// A flow without `history` performs lookups but never records them.
    pub fn new(client: WeatherClient, history: Option<HistoryWriterHandle>) -> Self {
        Self { client, history }
    }

    /// Look up current weather for `city` and derive a clothing suggestion.
    ///
    /// The session is an explicit parameter; when absent, no history is
    /// written. History writes are submitted without being awaited: a failed
    /// write is logged by the writer and never affects the returned outcome.
    pub async fn lookup(
        &self,
        session: Option<&Session>,
        city: &str,
    ) -> Result<LookupOutcome, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ValidationError::EmptyCity.into());
        }

        let observation = self
            .client
            .current_weather(city)
            .await
            .map_err(|e| AppError::Lookup(map_weather_error(e)))?;

        let suggestion = classify(observation.temperature_c, &observation.condition_label);

        if let Some(session) = session {
            if let Some(history) = &self.history {
                history.submit(NewHistoryRecord {
                    owner_id: session.user_id.clone(),
                    city: observation.location_name.clone(),
                    condition: observation.condition_label.clone(),
                    temperature_c: observation.temperature_c,
                    temperature_max_c: observation.temperature_max_c,
                    temperature_min_c: observation.temperature_min_c,
                    humidity_pct: observation.humidity_pct,
                    description: observation.condition_description.clone(),
                });
            }
        } else {
            tracing::debug!("No active session, search not recorded");
        }

        Ok(LookupOutcome {
            observation,
            suggestion,
        })
    }
}

fn map_weather_error(e: WeatherError) -> LookupError {
    match e {
        WeatherError::CityNotFound(city) => LookupError::CityNotFound(city),
        WeatherError::Network(e) => LookupError::Transport(e.to_string()),
        WeatherError::Parse(msg) => LookupError::InvalidResponse(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_error_mapping() {
        let mapped = map_weather_error(WeatherError::CityNotFound("Atlantis".into()));
        assert!(matches!(mapped, LookupError::CityNotFound(c) if c == "Atlantis"));

        let mapped = map_weather_error(WeatherError::Parse("bad json".into()));
        assert!(matches!(mapped, LookupError::InvalidResponse(_)));
    }
}
