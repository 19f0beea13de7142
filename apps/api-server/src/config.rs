//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "database")]
use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// HTTP worker threads.
    pub workers: usize,
    #[cfg(feature = "database")]
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "database")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
            sqlx_logging: parse_flag("DB_LOG_QUERIES").unwrap_or(false),
            ..DatabaseConfig::new(url)
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            workers: parse_var("WORKERS").unwrap_or_else(|| {
                std::thread::available_parallelism().map_or(1, |n| n.get())
            }),
            #[cfg(feature = "database")]
            database,
            run_migrations: parse_flag("RUN_MIGRATIONS").unwrap_or(true),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// `false`/`0`/`no`/`off` are false, anything else set is true.
fn parse_flag(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| {
        !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        )
    })
}
