//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CascadeConfig, CascadeStrategy, ConfigError, DatabaseConfig,
    Environment, Locale, PresentationConfig, RequestConfig,
};
