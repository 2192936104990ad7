//! Display formatting in the target locale (pt-BR).

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use clima_advisor::ClothingSuggestion;
use clima_history::HistoryRecord;
use clima_weather::WeatherObservation;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// "12 de março de 2026 às 14:05"
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{:02} de {} de {} às {:02}:{:02}",
        dt.day(),
        MONTHS_PT[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Weather panel plus clothing suggestion for a lookup result.
pub fn format_outcome(observation: &WeatherObservation, suggestion: &ClothingSuggestion) -> String {
    format!(
        "{}\n{}\n\n{:.0}°C\nMáx: {:.0}°C  Mín: {:.0}°C\nUmidade: {}%  Vento: {}\n\nSugestão de Roupa\n{}\n{}\n",
        observation.location_name,
        capitalize_first(&observation.condition_description),
        observation.temperature_c,
        observation.temperature_max_c,
        observation.temperature_min_c,
        observation.humidity_pct,
        observation.wind_speed,
        suggestion.headline,
        suggestion.detail,
    )
}

/// One history entry.
pub fn format_history_record(record: &HistoryRecord) -> String {
    format!(
        "{} — {:.0}°C\n{}\nClima: {}  Umidade: {}%  Máx: {:.0}°C  Mín: {:.0}°C\n{}\n",
        record.city,
        record.temperature_c,
        capitalize_first(&record.description),
        record.condition,
        record.humidity_pct,
        record.temperature_max_c,
        record.temperature_min_c,
        format_timestamp(&record.searched_at),
    )
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
