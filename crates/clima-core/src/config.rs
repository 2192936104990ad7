use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather endpoint settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Search history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key for the weather endpoint
    /// Create at: https://openweathermap.org/api
    #[serde(default = "default_weather_api_key")]
    pub api_key: String,

    /// Endpoint base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Language code sent with each request; affects condition descriptions
    #[serde(default = "default_weather_lang")]
    pub lang: String,
}

fn default_weather_api_key() -> String {
    "YOUR_OPENWEATHER_API_KEY".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_lang() -> String {
    "pt_br".to_string()
}

impl WeatherConfig {
    /// Check if the API key is configured (not a placeholder)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_key.starts_with("YOUR_")
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: default_weather_api_key(),
            base_url: default_weather_base_url(),
            lang: default_weather_lang(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// SQLite database file; defaults to `history.db` in the config directory
    #[serde(default)]
    pub db_path: Option<String>,

    /// Rows returned by the history view
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

fn default_history_limit() -> u32 {
    20
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            limit: default_history_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clima");

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Save configuration to its file, creating the directory as needed
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&config_path, toml).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("clima");
        Ok(dir.join("config.toml"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if Url::parse(&self.weather.base_url).is_err() {
            result.add_error("weather.base_url", "not a valid URL");
        }

        if !self.weather.is_configured() {
            result.add_warning("weather.api_key", "not set; weather lookups will fail");
        }

        if self.weather.lang.is_empty() {
            result.add_warning("weather.lang", "empty; the endpoint default will be used");
        }

        if self.history.limit == 0 {
            result.add_warning("history.limit", "is 0; the history view will be empty");
        }

        result
    }

    /// Path of the history database file.
    pub fn history_db_path(&self) -> PathBuf {
        self.history
            .db_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config_dir.join("history.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate_with_api_key_warning() {
        let config = Config::default();
        let result = config.validate();

        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_configured_key_clears_warning() {
        let mut config = Config::default();
        config.weather.api_key = "abc123".to_string();

        let result = config.validate();
        assert!(!result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_bad_base_url_is_an_error() {
        let mut config = Config::default();
        config.weather.base_url = "not a url".to_string();

        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("weather.base_url"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.weather.api_key = "abc123".to_string();
        config.history.limit = 5;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.weather.api_key, "abc123");
        assert_eq!(parsed.history.limit, 5);
        assert_eq!(parsed.weather.lang, "pt_br");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("config_dir = \"/tmp/clima\"").unwrap();

        assert_eq!(parsed.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(parsed.history.limit, 20);
    }

    #[test]
    fn test_history_db_path_defaults_into_config_dir() {
        let parsed: Config = toml::from_str("config_dir = \"/tmp/clima\"").unwrap();
        assert_eq!(parsed.history_db_path(), PathBuf::from("/tmp/clima/history.db"));
    }

    #[test]
    fn test_explicit_history_db_path_wins() {
        let mut config = Config::default();
        config.history.db_path = Some("/data/clima.db".to_string());
        assert_eq!(config.history_db_path(), PathBuf::from("/data/clima.db"));
    }
}
