//! Clothing suggestion classifier for Clima
//!
//! Maps a current-weather reading (temperature in Celsius plus a coarse
//! condition label) to a wardrobe suggestion. Pure data-in/data-out: no I/O,
//! no failure mode, deterministic for identical inputs.

use serde::{Deserialize, Serialize};

/// Display icon for a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionIcon {
    Rain,
    HotSun,
    MildSun,
    LightCloud,
    ColdCloud,
}

/// The five mutually exclusive, exhaustive suggestion buckets.
///
/// Precipitation dominates wardrobe choice, so `RainGear` is checked before
/// any temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionBucket {
    RainGear,
    HeatProtective,
    StandardComfort,
    LightLayer,
    HeavyWinter,
}

/// A wardrobe suggestion ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClothingSuggestion {
    pub bucket: SuggestionBucket,
    pub icon: SuggestionIcon,
    pub headline: &'static str,
    pub detail: &'static str,
}

/// Tokens that mark a condition label as rain, matched case-insensitively
/// anywhere in the label. "chuva" covers labels already localized by the
/// weather API's `lang` parameter.
const RAIN_TOKENS: &[&str] = &["rain", "chuva"];

impl SuggestionBucket {
    /// Presentation triple for this bucket.
    pub fn suggestion(self) -> ClothingSuggestion {
        match self {
            Self::RainGear => ClothingSuggestion {
                bucket: self,
                icon: SuggestionIcon::Rain,
                headline: "🌂 Guarda-chuva ou capa de chuva",
                detail: "Está chovendo! Não esqueça de se proteger da água.",
            },
            Self::HeatProtective => ClothingSuggestion {
                bucket: self,
                icon: SuggestionIcon::HotSun,
                headline: "👕 Roupas leves, chapéu e óculos de sol",
                detail: "Está muito quente! Vista roupas leves e se hidrate.",
            },
            Self::StandardComfort => ClothingSuggestion {
                bucket: self,
                icon: SuggestionIcon::MildSun,
                headline: "👔 Camiseta e calça leve",
                detail: "Temperatura agradável para roupas confortáveis.",
            },
            Self::LightLayer => ClothingSuggestion {
                bucket: self,
                icon: SuggestionIcon::LightCloud,
                headline: "🧥 Jaqueta ou suéter",
                detail: "Está fresco, melhor levar uma jaqueta.",
            },
            Self::HeavyWinter => ClothingSuggestion {
                bucket: self,
                icon: SuggestionIcon::ColdCloud,
                headline: "🧣 Casaco pesado, cachecol e luvas",
                detail: "Está frio! Agasalhe-se bem antes de sair.",
            },
        }
    }
}

/// Classify a weather reading into a clothing suggestion.
///
/// Total over any finite temperature and any label, including empty or
/// unrecognized ones. Decision order is part of the contract: a rain label
/// wins regardless of temperature, then the temperature buckets apply with
/// 30.0 and 20.0 inside the comfort range and 10.0 inside the light-layer
/// range.
pub fn classify(temperature_c: f64, condition_label: &str) -> ClothingSuggestion {
    bucket_for(temperature_c, condition_label).suggestion()
}

fn bucket_for(temperature_c: f64, condition_label: &str) -> SuggestionBucket {
    let label = condition_label.to_lowercase();
    if RAIN_TOKENS.iter().any(|token| label.contains(token)) {
        SuggestionBucket::RainGear
    } else if temperature_c > 30.0 {
        SuggestionBucket::HeatProtective
    } else if temperature_c >= 20.0 {
        SuggestionBucket::StandardComfort
    } else if temperature_c >= 10.0 {
        SuggestionBucket::LightLayer
    } else {
        SuggestionBucket::HeavyWinter
    }
}
