//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of the repository traits
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//!
//! Opening a database creates the schema and seeds the default admin account
//! and site copy into empty tables.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::{SeedOutcome, SqliteRepository};
