// src/config.rs
//
// Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use crate::db::get_database_path;
use crate::error::{AppError, AppResult};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Credentials and defaults for the TMDB metadata provider
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    /// Language used when a request does not name one
    pub language: String,
}

/// Server configuration.
///
/// Only the TMDB key is required; everything else has a local-development
/// default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`
    pub cors_origins: Vec<String>,
    pub database_path: PathBuf,
    pub tmdb: TmdbConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default                            |
    /// |--------------------------|------------------------------------|
    /// | `TMDB_API_KEY`           | required                           |
    /// | `TMDB_BASE_URL`          | `https://api.themoviedb.org/3`     |
    /// | `TMDB_LANGUAGE`          | `pt-BR`                            |
    /// | `DRAMALOG_DATABASE_PATH` | `{data_dir}/dramalog/dramalog.db`  |
    /// | `HOST`                   | `0.0.0.0`                          |
    /// | `PORT`                   | `3000`                             |
    /// | `CORS_ORIGINS`           | `http://localhost:3001`            |
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("TMDB_API_KEY")
            .ok_or_else(|| AppError::Config("TMDB_API_KEY must be set".to_string()))?;

        let tmdb = TmdbConfig {
            api_key,
            base_url: var("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.into()),
            language: var("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
        };

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a valid u16, got '{}'", raw)))?,
            None => 3000,
        };

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let database_path = match var("DRAMALOG_DATABASE_PATH") {
            Some(path) => PathBuf::from(path),
            None => get_database_path()?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            database_path,
            tmdb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "8080")]));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("TMDB_API_KEY")));

        let result = AppConfig::from_lookup(lookup(&[("TMDB_API_KEY", "  ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "key"),
            ("DRAMALOG_DATABASE_PATH", "/tmp/dramalog.db"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3001"]);
        assert_eq!(config.tmdb.base_url, DEFAULT_TMDB_BASE_URL);
        assert_eq!(config.tmdb.language, "pt-BR");
        assert_eq!(config.database_path, PathBuf::from("/tmp/dramalog.db"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "key"),
            ("TMDB_LANGUAGE", "en-US"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
            ("DRAMALOG_DATABASE_PATH", "/tmp/dramalog.db"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_port() {
        let result = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "key"),
            ("PORT", "not-a-port"),
            ("DRAMALOG_DATABASE_PATH", "/tmp/dramalog.db"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
