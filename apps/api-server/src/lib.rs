//! # Quill API Server
//!
//! Blog post CRUD over HTTP, built on Actix-web.
//! The binary in `main.rs` is a thin wrapper; everything lives here so the
//! integration tests can start the same server in-process.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod startup;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::{AppState, StateError};
