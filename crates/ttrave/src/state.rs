//! Application state with repository-based storage.
//!
//! The storage backend is chosen once, from [`Config`], and handed to every
//! consumer as an `Arc<dyn Storage>`. Nothing swaps it afterwards.

use std::{fmt, sync::Arc};

use anyhow::Context;
use serde::Serialize;

use ttrave_core::storage::Storage;

use crate::config::{Config, DatabaseUrl, StorageMode};
use crate::storage::{InMemoryRepository, SqliteRepository};

/// The backend an [`AppState`] ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Memory,
    Sqlite,
    /// SQLite was requested without a database: reads are empty, writes fail.
    SqliteDisconnected,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite => "sqlite",
            BackendKind::SqliteDisconnected => "sqlite_disconnected",
        }
    }

    /// Whether data written through this backend outlives the process.
    pub fn is_durable(&self) -> bool {
        matches!(self, BackendKind::Sqlite)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared application state.
///
/// Cheap to clone; every clone points at the same backend.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub backend: BackendKind,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, backend: BackendKind) -> Self {
        Self { storage, backend }
    }

    /// Builds the configured backend.
    ///
    /// - `memory`: in-memory storage.
    /// - `sqlite`: SQLite at `database_url`, or a disconnected SQLite backend
    ///   when no URL is configured.
    /// - `auto`: SQLite when `database_url` is set, in-memory otherwise.
    ///
    /// Fails only when a configured database cannot be opened.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let seed = config.seed_data();

        let mode = match (config.backend, &config.database_url) {
            (StorageMode::Auto, Some(_)) => StorageMode::Sqlite,
            (StorageMode::Auto, None) => StorageMode::Memory,
            (mode, _) => mode,
        };

        let state = match (mode, &config.database_url) {
            (StorageMode::Sqlite, Some(url)) => {
                let repo = match url {
                    DatabaseUrl::File(path) => {
                        SqliteRepository::open(&path.to_string_lossy(), &seed).await
                    }
                    DatabaseUrl::Memory => SqliteRepository::open_in_memory(&seed).await,
                }
                .with_context(|| format!("Failed to open database at {url}"))?;

                tracing::info!(database_url = %url, "Using SQLite storage");
                Self::new(Arc::new(repo), BackendKind::Sqlite)
            }
            (StorageMode::Sqlite, None) => {
                tracing::warn!(
                    "SQLite storage requested but DATABASE_URL is not set; \
                     reads will be empty and writes will fail"
                );
                Self::new(
                    Arc::new(SqliteRepository::disconnected()),
                    BackendKind::SqliteDisconnected,
                )
            }
            _ => {
                tracing::info!("Using in-memory storage; data will not persist");
                Self::new(
                    Arc::new(InMemoryRepository::with_seed(&seed)),
                    BackendKind::Memory,
                )
            }
        };

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use ttrave_core::site::NewContent;
    use ttrave_core::storage::RepositoryError;

    use super::*;

    #[tokio::test]
    async fn test_no_database_url_selects_memory() {
        let state = AppState::from_config(&Config::default()).await.unwrap();

        assert_eq!(state.backend, BackendKind::Memory);
        assert!(state
            .storage
            .get_user_by_username("admin")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_database_url_selects_sqlite() {
        let config = Config {
            database_url: Some(DatabaseUrl::Memory),
            ..Config::default()
        };

        let state = AppState::from_config(&config).await.unwrap();

        assert_eq!(state.backend, BackendKind::Sqlite);
        assert!(state.backend.is_durable());
        let hero = state.storage.get_content_by_key("hero.title").await.unwrap();
        assert!(hero.is_some());
    }

    #[tokio::test]
    async fn test_forced_memory_ignores_database_url() {
        let config = Config {
            database_url: Some(DatabaseUrl::Memory),
            backend: StorageMode::Memory,
            ..Config::default()
        };

        let state = AppState::from_config(&config).await.unwrap();

        assert_eq!(state.backend, BackendKind::Memory);
    }

    #[tokio::test]
    async fn test_sqlite_without_url_is_disconnected() {
        let config = Config {
            backend: StorageMode::Sqlite,
            ..Config::default()
        };

        let state = AppState::from_config(&config).await.unwrap();

        assert_eq!(state.backend, BackendKind::SqliteDisconnected);
        assert!(state.storage.get_content().await.unwrap().is_empty());
        assert_eq!(
            state
                .storage
                .set_content(NewContent::new("site.name", "X"))
                .await,
            Err(RepositoryError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_configured_admin_is_seeded() {
        let config = Config {
            admin_username: "owner".to_string(),
            admin_password: "s3cret".to_string(),
            database_url: Some(DatabaseUrl::Memory),
            ..Config::default()
        };

        let state = AppState::from_config(&config).await.unwrap();

        let owner = state
            .storage
            .get_user_by_username("owner")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owner.password, "s3cret");
    }

    #[tokio::test]
    async fn test_unopenable_database_is_an_error() {
        let missing_dir = std::env::temp_dir()
            .join(format!("ttrave-missing-{}", uuid::Uuid::new_v4()))
            .join("nested")
            .join("ttrave.db");
        let config = Config {
            database_url: Some(DatabaseUrl::File(missing_dir)),
            ..Config::default()
        };

        assert!(AppState::from_config(&config).await.is_err());
    }
}
