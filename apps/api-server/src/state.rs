//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "database")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "database")]
use quill_infra::database::{SqlPostRepository, connect};

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[cfg(feature = "database")]
    #[error("failed to apply migrations: {0}")]
    Migration(#[from] migration::DbErr),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Wrap an already-built repository. The test harness injects its own
    /// database through here.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured storage.
    ///
    /// Falls back to the in-memory repository when no database is
    /// configured or the connection fails. A database that connects but
    /// can't be migrated is an error: serving from it would fail every request.
    pub async fn new(config: &AppConfig) -> Result<Self, StateError> {
        #[cfg(feature = "database")]
        let posts: Arc<dyn PostRepository> = match &config.database {
            Some(db_config) => match connect(db_config).await {
                Ok(conn) => {
                    if config.run_migrations {
                        Migrator::up(&conn, None).await?;
                        tracing::info!("Migrations applied");
                    }
                    Arc::new(SqlPostRepository::new(conn))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "database"))]
        let posts: Arc<dyn PostRepository> = {
            let _ = config;
            tracing::info!("Running without database feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }
}

#[cfg(all(test, feature = "database"))]
mod tests {
    use quill_infra::database::DatabaseConfig;
    use sea_orm::ConnectionTrait;

    use super::*;

    fn config_for(url: String) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
            database: Some(DatabaseConfig {
                sqlx_logging: false,
                ..DatabaseConfig::new(url)
            }),
            run_migrations: true,
        }
    }

    #[tokio::test]
    async fn test_migration_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("quill.db").display());

        // A `posts` table without a `created` column breaks the index step.
        let conn = sea_orm::Database::connect(&url).await.unwrap();
        conn.execute_unprepared("CREATE TABLE posts (id TEXT PRIMARY KEY)")
            .await
            .unwrap();
        conn.close().await.unwrap();

        let result = AppState::new(&config_for(url)).await;
        assert!(matches!(result, Err(StateError::Migration(_))));
    }

    #[tokio::test]
    async fn test_migrated_database_serves_posts() {
        let state = AppState::new(&config_for("sqlite::memory:".to_string()))
            .await
            .unwrap();
        assert_eq!(state.posts.count().await.unwrap(), 0);
    }
}
