//! Integration test harness.
//!
//! Every test builds its own [`TestApp`]: a freshly migrated database, a
//! server bound to an ephemeral port, and a seeded fixture generator.
//! Tests end with [`TestApp::teardown`], which drops the schema and stops
//! the server.
//!
//! The database defaults to in-memory SQLite, private to each test. Point
//! `TEST_DATABASE_URL` at a disposable database to run against something
//! else; the schema is dropped unconditionally, and tests sharing one
//! external database must run with `--test-threads=1`.
//!
//! `FIXTURE_SEED` pins the generator seed; `TEST_LOG` turns on tracing.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::net::TcpListener;
use std::sync::{Arc, LazyLock};

use actix_web::dev::ServerHandle;
use migration::{Migrator, MigratorTrait};
use sea_orm::DbConn;
use serde_json::Value;
use uuid::Uuid;

use api_server::telemetry::{TelemetryConfig, try_init_telemetry};
use api_server::{AppState, startup};
use quill_core::domain::BlogPost;
use quill_core::ports::{BaseRepository, PostRepository};
use quill_infra::database::{DatabaseConfig, SqlPostRepository, connect};
use quill_infra::fixtures::{PostGenerator, SeededPostGenerator};
use quill_shared::dto::{AuthorPayload, CreatePostRequest, PostView};

static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = try_init_telemetry(&TelemetryConfig::default());
    }
});

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub db: DbConn,
    pub posts: Arc<SqlPostRepository>,
    generator: Box<dyn PostGenerator>,
    server: ServerHandle,
}

impl TestApp {
    /// Start a server against a fresh database.
    pub async fn spawn() -> Self {
        let seed = std::env::var("FIXTURE_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(SeededPostGenerator::DEFAULT_SEED);
        LazyLock::force(&TRACING);
        tracing::info!(seed, "Fixture generator seeded");
        Self::spawn_with_generator(Box::new(SeededPostGenerator::new(seed))).await
    }

    pub async fn spawn_with_generator(generator: Box<dyn PostGenerator>) -> Self {
        LazyLock::force(&TRACING);

        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite::memory:".to_string());
        let config = DatabaseConfig {
            sqlx_logging: false,
            ..DatabaseConfig::new(url)
        };

        let db = connect(&config)
            .await
            .expect("Failed to connect to test database");
        // Rolls back leftovers from an aborted run before applying.
        Migrator::refresh(&db)
            .await
            .expect("Failed to migrate test database");

        let posts = Arc::new(SqlPostRepository::new(db.clone()));
        let state = AppState::with_repository(posts.clone());

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener
            .local_addr()
            .expect("Listener has no local address")
            .port();

        let server = startup::run(listener, state, 1).expect("Failed to build server");
        let handle = server.handle();
        tokio::spawn(server);

        tracing::info!(port, "Test server started");

        Self {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            db,
            posts,
            generator,
            server: handle,
        }
    }

    /// Insert `n` synthetic posts directly into the database.
    pub async fn seed(&mut self, n: usize) -> Vec<BlogPost> {
        let posts = self.generator.posts(n);
        let inserted = self
            .posts
            .insert_many(posts.clone())
            .await
            .expect("Failed to seed posts");
        assert_eq!(inserted, n as u64, "Seeding wrote an unexpected row count");
        posts
    }

    /// One synthetic create payload.
    pub fn generate(&mut self) -> CreatePostRequest {
        let post = self.generator.new_post();
        CreatePostRequest {
            title: post.title,
            content: post.content,
            author: AuthorPayload {
                first_name: post.author.first_name,
                last_name: post.author.last_name,
            },
        }
    }

    /// Read a post straight from the database, bypassing HTTP.
    pub async fn lookup(&self, id: Uuid) -> Option<BlogPost> {
        self.posts.find_by_id(id).await.expect("Lookup query failed")
    }

    pub async fn stored_count(&self) -> u64 {
        self.posts.count().await.expect("Count query failed")
    }

    /// Drop every table the migrations created, then stop the server.
    pub async fn teardown(self) {
        Migrator::reset(&self.db)
            .await
            .expect("Failed to drop test database");
        self.server.stop(true).await;
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn list_posts(&self) -> reqwest::Response {
        self.client
            .get(self.url("/posts"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_post(&self, id: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/posts/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn create_post(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/posts"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn update_post(&self, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/posts/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_post(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/posts/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Assert a JSON value is a post view with exactly the expected keys and
/// return it parsed.
pub fn assert_post_view(value: &Value) -> PostView {
    let object = value.as_object().expect("Post view is not a JSON object");
    let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = PostView::KEYS.into_iter().collect();
    assert_eq!(keys, expected, "Post view has the wrong key set");

    serde_json::from_value(value.clone()).expect("Post view does not match its schema")
}
