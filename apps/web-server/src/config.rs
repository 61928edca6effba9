//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::DatabaseConfig;

/// The server cannot run without its database.
#[derive(Debug, thiserror::Error)]
#[error("DATABASE_URL must be set")]
pub struct MissingDatabaseUrl;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, MissingDatabaseUrl> {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").map_err(|_| MissingDatabaseUrl)?,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        })
    }
}
