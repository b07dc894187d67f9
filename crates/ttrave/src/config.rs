use std::{env, fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

use ttrave_core::site::{SeedData, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported database URL scheme '{0}' (only SQLite is supported)")]
    UnsupportedScheme(String),
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),
    #[error("Unknown storage backend '{0}' (expected 'auto', 'memory' or 'sqlite')")]
    UnknownBackend(String),
}

/// Which backend to build at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageMode {
    /// SQLite when a database URL is configured, in-memory otherwise.
    #[default]
    Auto,
    Memory,
    Sqlite,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Auto => "auto",
            StorageMode::Memory => "memory",
            StorageMode::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(StorageMode::Auto),
            "memory" | "inmemory" | "in-memory" => Ok(StorageMode::Memory),
            "sqlite" => Ok(StorageMode::Sqlite),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Location of the SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    File(PathBuf),
    Memory,
}

impl FromStr for DatabaseUrl {
    type Err = ConfigError;

    /// Accepts `sqlite://path`, `sqlite:path`, `file:path`, a bare path,
    /// and `:memory:` / `sqlite::memory:`. Query strings are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let without_query = raw.split('?').next().unwrap_or_default();

        let path = if let Some(rest) = without_query.strip_prefix("sqlite://") {
            rest
        } else if let Some(rest) = without_query.strip_prefix("sqlite:") {
            rest
        } else if let Some(rest) = without_query.strip_prefix("file:") {
            rest
        } else if let Some((scheme, _)) = without_query.split_once("://") {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        } else {
            without_query
        };

        match path {
            "" => Err(ConfigError::InvalidDatabaseUrl(raw.to_string())),
            ":memory:" => Ok(DatabaseUrl::Memory),
            path => Ok(DatabaseUrl::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseUrl::File(path) => write!(f, "sqlite://{}", path.display()),
            DatabaseUrl::Memory => f.write_str("sqlite::memory:"),
        }
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database location (default: unset)
    pub database_url: Option<DatabaseUrl>,
    /// Backend selection (default: auto)
    pub backend: StorageMode,
    /// Username of the seeded admin account (default: "admin")
    pub admin_username: String,
    /// Password of the seeded admin account (default: "Ttrave")
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite database location (default: unset)
    /// - `STORAGE_BACKEND` - `auto`, `memory` or `sqlite` (default: "auto")
    /// - `ADMIN_USERNAME` - seeded admin username (default: "admin")
    /// - `ADMIN_PASSWORD` - seeded admin password (default: "Ttrave")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            database_url: var("DATABASE_URL").map(|v| v.parse()).transpose()?,
            backend: var("STORAGE_BACKEND")
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or_default(),
            admin_username: var("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: var("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        };

        if config.uses_default_password() {
            tracing::warn!(
                username = %config.admin_username,
                "ADMIN_PASSWORD is not set; the seeded admin account uses the default password"
            );
        }

        Ok(config)
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// Rows written into an empty store.
    pub fn seed_data(&self) -> SeedData {
        SeedData::with_admin(self.admin_username.clone(), self.admin_password.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            backend: StorageMode::Auto,
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.uses_default_password());
        assert_eq!(config.seed_data(), SeedData::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://data/ttrave.db"),
            ("STORAGE_BACKEND", "SQLite"),
            ("ADMIN_USERNAME", "owner"),
            ("ADMIN_PASSWORD", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url,
            Some(DatabaseUrl::File(PathBuf::from("data/ttrave.db")))
        );
        assert_eq!(config.backend, StorageMode::Sqlite);
        assert!(!config.uses_default_password());
        assert_eq!(config.seed_data().admin.username, "owner");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", ""), ("ADMIN_PASSWORD", "  ")]))
                .unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = Config::from_lookup(lookup(&[("STORAGE_BACKEND", "redis")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownBackend("redis".to_string()));
    }

    #[test]
    fn test_database_url_forms() {
        let file = |p: &str| DatabaseUrl::File(PathBuf::from(p));

        assert_eq!("sqlite://ttrave.db".parse::<DatabaseUrl>(), Ok(file("ttrave.db")));
        assert_eq!(
            "sqlite:///var/lib/ttrave.db".parse::<DatabaseUrl>(),
            Ok(file("/var/lib/ttrave.db"))
        );
        assert_eq!("sqlite:ttrave.db".parse::<DatabaseUrl>(), Ok(file("ttrave.db")));
        assert_eq!("file:ttrave.db".parse::<DatabaseUrl>(), Ok(file("ttrave.db")));
        assert_eq!("./ttrave.db".parse::<DatabaseUrl>(), Ok(file("./ttrave.db")));
        assert_eq!(
            "sqlite://ttrave.db?mode=rwc".parse::<DatabaseUrl>(),
            Ok(file("ttrave.db"))
        );
        assert_eq!(":memory:".parse::<DatabaseUrl>(), Ok(DatabaseUrl::Memory));
        assert_eq!("sqlite::memory:".parse::<DatabaseUrl>(), Ok(DatabaseUrl::Memory));
    }

    #[test]
    fn test_database_url_rejects_other_databases() {
        assert_eq!(
            "postgres://user@localhost/ttrave".parse::<DatabaseUrl>(),
            Err(ConfigError::UnsupportedScheme("postgres".to_string()))
        );
        assert!(matches!(
            "sqlite://".parse::<DatabaseUrl>(),
            Err(ConfigError::InvalidDatabaseUrl(_))
        ));
    }

    #[test]
    fn test_storage_mode_parsing() {
        assert_eq!("auto".parse::<StorageMode>(), Ok(StorageMode::Auto));
        assert_eq!("in-memory".parse::<StorageMode>(), Ok(StorageMode::Memory));
        assert_eq!(StorageMode::Sqlite.to_string(), "sqlite");
    }
}
