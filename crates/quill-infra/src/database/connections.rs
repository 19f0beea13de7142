use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Connection settings for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            sqlx_logging: true,
        }
    }

    /// Every pooled connection to `sqlite::memory:` opens its own empty
    /// database, so those URLs must be served by exactly one connection.
    pub fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:") || self.url.contains("mode=memory")
    }
}

/// Lifetime given to the lone in-memory SQLite connection. Recycling it
/// would throw the database away, so it is pinned for as long as the pool
/// exists.
const PINNED_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(&config.url);
    opts.connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.sqlx_logging);

    if config.is_sqlite_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(PINNED_LIFETIME)
            .max_lifetime(PINNED_LIFETIME);
    } else {
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(Duration::from_secs(300));
    }

    opts
}

/// Open a connection pool for the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let opts = connect_options(config);
    let pool = opts.get_max_connections();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        backend = ?conn.get_database_backend(),
        pool,
        "Database connected"
    );

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_in_memory_sqlite() {
        assert!(DatabaseConfig::new("sqlite::memory:").is_sqlite_memory());
        assert!(DatabaseConfig::new("sqlite://file:quill?mode=memory&cache=shared").is_sqlite_memory());
        assert!(!DatabaseConfig::new("sqlite://quill.db").is_sqlite_memory());
        assert!(!DatabaseConfig::new("postgres://localhost/quill").is_sqlite_memory());
    }

    #[test]
    fn test_in_memory_sqlite_connection_is_never_recycled() {
        let opts = connect_options(&DatabaseConfig::new("sqlite::memory:"));

        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_min_connections(), Some(1));
        assert_eq!(opts.get_idle_timeout(), Some(PINNED_LIFETIME));
        assert_eq!(opts.get_max_lifetime(), Some(PINNED_LIFETIME));
    }

    #[test]
    fn test_pooled_database_uses_configured_limits() {
        let config = DatabaseConfig {
            max_connections: 20,
            min_connections: 2,
            ..DatabaseConfig::new("postgres://localhost/quill")
        };
        let opts = connect_options(&config);

        assert_eq!(opts.get_max_connections(), Some(20));
        assert_eq!(opts.get_min_connections(), Some(2));
        assert_eq!(opts.get_idle_timeout(), Some(Duration::from_secs(300)));
        assert_eq!(opts.get_max_lifetime(), None);
    }
}
