use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A missing record is not an error: lookups return `Ok(None)` and deletes
/// return `Ok(false)`. `NotFound` is only produced by backends when a
/// statement that must touch a row touches none.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// No durable store is configured and the operation needs one.
    #[error("Database not available")]
    Unavailable,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Destination",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Destination not found: abc-123");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Content",
            id: "site.name".to_string(),
        };
        assert_eq!(error.to_string(), "Content already exists: site.name");
    }

    #[test]
    fn test_repository_error_unavailable_display() {
        assert_eq!(
            RepositoryError::Unavailable.to_string(),
            "Database not available"
        );
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open file".to_string());
        assert_eq!(error.to_string(), "Connection failed: unable to open file");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: users".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: users");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("bad uuid".to_string());
        assert_eq!(error.to_string(), "Invalid data: bad uuid");
    }
}
