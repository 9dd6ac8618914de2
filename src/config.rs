use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::tables;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// External AI ranker settings
#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            api_key: None,
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_true() -> bool { true }
fn default_endpoint() -> String { "https://api.anthropic.com".to_string() }
fn default_api_version() -> String { "2023-06-01".to_string() }
fn default_model() -> String { "claude-haiku-4-5-20251001".to_string() }
fn default_max_tokens() -> u32 { 2048 }
fn default_timeout_secs() -> u64 { 20 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_sports_weight")]
    pub sports: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_college_year_weight")]
    pub college_year: f64,
    #[serde(default = "default_major_bio_weight")]
    pub major_bio: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            sports: default_sports_weight(),
            availability: default_availability_weight(),
            college_year: default_college_year_weight(),
            major_bio: default_major_bio_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            sports: config.sports,
            availability: config.availability,
            college_year: config.college_year,
            major_bio: config.major_bio,
        }
    }
}

fn default_sports_weight() -> f64 { tables::SPORTS_WEIGHT }
fn default_availability_weight() -> f64 { tables::AVAILABILITY_WEIGHT }
fn default_college_year_weight() -> f64 { tables::COLLEGE_YEAR_WEIGHT }
fn default_major_bio_weight() -> f64 { tables::MAJOR_BIO_WEIGHT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with POKEME_)
    /// 5. ANTHROPIC_API_KEY for the ranker credential
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., POKEME__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("POKEME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_api_key_override(settings, std::env::var("ANTHROPIC_API_KEY").ok())?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// The conventional ANTHROPIC_API_KEY variable wins over any configured key
fn apply_api_key_override(settings: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    match api_key.filter(|k| !k.is_empty()) {
        Some(key) => Config::builder()
            .add_source(settings)
            .set_override("ranking.api_key", key)?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.sports, 0.55);
        assert_eq!(weights.availability, 0.20);
        assert_eq!(weights.college_year, 0.10);
        assert_eq!(weights.major_bio, 0.15);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert!(settings.ranking.enabled);
        assert_eq!(settings.ranking.api_key, None);
        assert_eq!(settings.ranking.max_tokens, 2048);
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_partial_sections_override() {
        let toml = r#"
            [ranking]
            enabled = false
            timeout_secs = 5

            [scoring.weights]
            sports = 0.7
        "#;
        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!settings.ranking.enabled);
        assert_eq!(settings.ranking.timeout_secs, 5);
        assert_eq!(settings.scoring.weights.sports, 0.7);
        assert_eq!(settings.scoring.weights.availability, 0.20);
    }

    #[test]
    fn test_api_key_override() {
        let base = Config::builder()
            .add_source(File::from_str("[ranking]\napi_key = \"from-file\"", FileFormat::Toml))
            .build()
            .unwrap();

        let settings: Settings = apply_api_key_override(base, Some("from-env".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.ranking.api_key.as_deref(), Some("from-env"));
    }
}
