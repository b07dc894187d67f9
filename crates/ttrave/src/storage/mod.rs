//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `ttrave_core::storage`:
//!
//! - [`inmemory::InMemoryRepository`]: process-local tables, nothing persisted
//! - [`sqlite::SqliteRepository`]: SQLite via `rusqlite` and `tokio-rusqlite`
//!
//! Which one a process uses is decided once at startup by
//! [`crate::state::AppState::from_config`].

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
