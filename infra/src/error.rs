//! Infrastructure-specific error types

use lp_core::errors::DomainError;

/// SQLSTATE raised by PostgreSQL on a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// Errors raised while setting up or probing infrastructure
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::database(e),
            InfrastructureError::Config(message) => DomainError::internal(message),
        }
    }
}

/// Logs a failed query and converts it into a domain error
pub(crate) fn query_failed(context: &'static str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, context, "Database query failed");
    DomainError::database(format!("{}: {}", context, err))
}

/// Row decoding failed; the schema and the entity disagree
pub(crate) fn decode_failed(err: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to decode row: {}", err))
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
