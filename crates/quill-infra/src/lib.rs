//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repository only, no external dependencies
//! - `database` - SQL storage via SeaORM (Postgres, SQLite)
//! - `fixtures` - Deterministic synthetic posts for seeding and tests

pub mod database;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use database::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SqlPostRepository, connect};

#[cfg(feature = "fixtures")]
pub use fixtures::{PostGenerator, SeededPostGenerator};
