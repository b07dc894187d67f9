//! In-memory storage backend.
//!
//! Every kind is kept in an insertion-ordered table wrapped in
//! `Arc<RwLock<_>>`. Nothing is persisted. A new repository starts out with
//! the default admin account and site copy, the same rows the SQLite
//! backend seeds into an empty database.
//!
//! # Example
//!
//! ```rust,ignore
//! use ttrave::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let admin = repo.get_user_by_username("admin").await?;
//! ```

mod repository;
mod table;

pub use repository::InMemoryRepository;
