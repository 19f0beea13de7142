//! Synthetic blog posts for seeding databases in tests and demos.
//!
//! Generation is behind the [`PostGenerator`] trait so tests can swap in
//! a scripted generator; [`SeededPostGenerator`] is the default and is
//! fully reproducible from its seed.

mod generator;
mod words;

pub use generator::{PostGenerator, SeededPostGenerator};
