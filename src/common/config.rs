// src/common/config.rs
//! Process configuration, loaded once at startup and read-only afterwards

use std::env;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://users_api.db";
const DEFAULT_JWT_SECRET: &str = "replace_with_strong_secret";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = match lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            Some(secret) => secret,
            None => {
                warn!("JWT_SECRET not set, falling back to the built-in development secret");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = lookup("RESET_DB")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            database_url,
            jwt_secret,
            port,
            cors_origins,
            reset_db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert!(!config.reset_db);
    }

    #[test]
    fn test_values_are_read_from_source() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s3cr3t"),
            ("PORT", "8081"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("RESET_DB", "TRUE"),
        ]);

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_secret, "s3cr3t");
        assert_eq!(config.port, 8081);
        assert_eq!(
            config.cors_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(config.reset_db);
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
