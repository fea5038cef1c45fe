use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Every variant carries the store's own message so it can be passed back
/// to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("{0}")]
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
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_passes_message_through() {
        let error = RepositoryError::QueryFailed(
            "Invalid UpdateExpression: Syntax error; token: \"<EOF>\"".to_string(),
        );
        assert_eq!(
            error.to_string(),
            "Invalid UpdateExpression: Syntax error; token: \"<EOF>\""
        );
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("unsupported attribute type".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: unsupported attribute type"
        );
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing attribute: name".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing attribute: name");
    }
}
