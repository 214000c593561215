//! Domain error types for the files service bootstrap.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use sea_orm::DbErr;

use crate::config::ConfigError;

/// Failure while applying the schema bootstrap batch.
///
/// Returned only after the surrounding transaction has been rolled back. The
/// underlying database error is kept as the source, not replaced.
#[derive(Debug, thiserror::Error)]
#[error("schema bootstrap failed: {source}")]
pub struct SchemaApplicationError {
    #[from]
    source: DbErr,
}

impl SchemaApplicationError {
    /// The database error that aborted the bootstrap.
    pub fn db_err(&self) -> &DbErr {
        &self.source
    }
}

/// Application-level errors for the runner binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or validated
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The database connection could not be established
    #[error("database connection failed: {0}")]
    Connect(#[source] DbErr),

    /// Schema initialization failed
    #[error(transparent)]
    Schema(#[from] SchemaApplicationError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_schema_application_error_keeps_source() {
        let err = SchemaApplicationError::from(DbErr::Custom("boom".to_string()));
        assert!(err.to_string().contains("schema bootstrap failed"));
        assert!(err.to_string().contains("boom"));
        assert!(err.source().is_some());
        assert!(matches!(err.db_err(), DbErr::Custom(_)));
    }

    #[test]
    fn test_app_error_is_transparent_for_schema_failures() {
        let schema_err = SchemaApplicationError::from(DbErr::Custom("boom".to_string()));
        let app_err = AppError::from(schema_err);
        assert_eq!(
            app_err.to_string(),
            "schema bootstrap failed: Custom Error: boom"
        );
    }
}
