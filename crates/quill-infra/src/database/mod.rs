//! Post storage - SeaORM-backed and in-memory repositories.

mod memory;

#[cfg(feature = "database")]
mod connections;
#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod sql_base;
#[cfg(feature = "database")]
mod sql_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use connections::{DatabaseConfig, connect};
#[cfg(feature = "database")]
pub use sql_base::SqlBaseRepository;
#[cfg(feature = "database")]
pub use sql_repo::SqlPostRepository;
