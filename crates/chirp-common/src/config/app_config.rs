//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub presentation: PresentationConfig,
    pub cascade: CascadeConfig,
    pub request: RequestConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Language used for relative-time labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan)
    #[default]
    #[serde(rename = "zh-tw")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Parse a locale tag, case-insensitively and accepting `_` for `-`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh-hant" | "zh-hant-tw" => Some(Self::ZhTw),
            "en" | "en-us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }
}

/// Presentation settings passed explicitly to the feed composer
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Characters kept from a tweet description in moderation listings
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

/// How a tweet deletion removes its dependent rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeStrategy {
    /// One store transaction: all rows go, or none do
    #[default]
    Transactional,
    /// Independent concurrent statements with per-statement retries
    Concurrent,
}

/// Cascade deletion settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CascadeConfig {
    #[serde(default)]
    pub strategy: CascadeStrategy,
    /// Retries per failed statement in `Concurrent` mode
    #[serde(default = "default_cascade_max_retries")]
    pub max_retries: u32,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            strategy: CascadeStrategy::default(),
            max_retries: default_cascade_max_retries(),
        }
    }
}

/// Per-request limits
#[derive(Debug, Clone, Copy)]
pub struct RequestConfig {
    /// Deadline applied to one composed operation
    pub deadline: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            deadline: Duration::from_millis(default_request_deadline_ms()),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "chirp".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_excerpt_chars() -> usize {
    50
}

fn default_cascade_max_retries() -> u32 {
    3
}

fn default_request_deadline_ms() -> u64 {
    5000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let env = match lookup("APP_ENV") {
            None => Environment::default(),
            Some(s) => match s.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
            },
        };

        let locale = match lookup("PRESENTATION_LOCALE") {
            None => Locale::default(),
            Some(s) => {
                Locale::parse(&s).ok_or(ConfigError::InvalidValue("PRESENTATION_LOCALE", s))?
            }
        };

        let strategy = match lookup("CASCADE_STRATEGY") {
            None => CascadeStrategy::default(),
            Some(s) => match s.to_lowercase().as_str() {
                "transactional" => CascadeStrategy::Transactional,
                "concurrent" => CascadeStrategy::Concurrent,
                _ => return Err(ConfigError::InvalidValue("CASCADE_STRATEGY", s)),
            },
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: number("DATABASE_MAX_CONNECTIONS")
                    .map_or_else(default_max_connections, |n| n as u32),
                min_connections: number("DATABASE_MIN_CONNECTIONS")
                    .map_or_else(default_min_connections, |n| n as u32),
            },
            presentation: PresentationConfig {
                locale,
                excerpt_chars: number("MODERATION_EXCERPT_CHARS")
                    .map_or_else(default_excerpt_chars, |n| n as usize),
            },
            cascade: CascadeConfig {
                strategy,
                max_retries: number("CASCADE_MAX_RETRIES")
                    .map_or_else(default_cascade_max_retries, |n| n as u32),
            },
            request: RequestConfig {
                deadline: Duration::from_millis(
                    number("REQUEST_DEADLINE_MS").unwrap_or_else(default_request_deadline_ms),
                ),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
