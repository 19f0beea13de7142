//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! Blog posts, their authors, and the ports storage adapters implement.
//! Nothing in here knows about HTTP or a particular database.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
