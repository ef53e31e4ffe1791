//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Without `DATABASE_URL` the server runs on the in-memory repository.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: env_or("DB_MIN_CONNECTIONS", defaults.min_connections),
                connect_timeout: Duration::from_secs(env_or(
                    "DB_CONNECT_TIMEOUT_SECS",
                    defaults.connect_timeout.as_secs(),
                )),
                sqlx_logging: env::var("DB_SQLX_LOGGING")
                    .map(|v| is_truthy(&v))
                    .unwrap_or(defaults.sqlx_logging),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", 8080),
            database,
        }
    }
}

/// Parse `key`, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
