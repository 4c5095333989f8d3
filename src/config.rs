use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Base URL of the REST backend, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Level passed to wasm-logger; `None` when logging is switched off
    pub fn log_level(&self) -> Option<log::Level> {
        if !self.enable_logging {
            return None;
        }
        Some(match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        })
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_to_local_backend() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_url(), "http://localhost:8080/api");
        assert!(!config.is_production());
        assert_eq!(config.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/api/"), Some("production"), None, Some("DEBUG"));
        assert_eq!(config.api_url(), "https://api.example.com/api");
        assert!(config.is_production());
        assert_eq!(config.log_level(), Some(log::Level::Debug));
    }

    #[test]
    fn test_logging_can_be_disabled() {
        let config = AppConfig::from_values(None, None, Some("false"), Some("trace"));
        assert_eq!(config.log_level(), None);
    }
}
