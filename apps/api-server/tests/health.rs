#![cfg(feature = "database")]

mod common;

use reqwest::StatusCode;
use serde_json::Value;

use common::TestApp;

#[tokio::test]
async fn health_reports_post_count() {
    let mut app = TestApp::spawn().await;
    app.seed(4).await;

    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["posts"], 4);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    app.teardown().await;
}

#[tokio::test]
async fn health_is_degraded_once_schema_is_gone() {
    use migration::{Migrator, MigratorTrait};

    let app = TestApp::spawn().await;
    Migrator::reset(&app.db).await.unwrap();

    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
    assert!(body.get("posts").is_none());

    // Put the schema back so teardown has something to drop.
    Migrator::up(&app.db, None).await.unwrap();
    app.teardown().await;
}
