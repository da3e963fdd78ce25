//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, UserError};

use lp_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    User(#[from] UserError),
}

/// Coarse classification of a domain error, one per HTTP status family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    Internal,
}

impl DomainError {
    /// Create an internal error from anything displayable
    pub fn internal(message: impl std::fmt::Display) -> Self {
        DomainError::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error from anything displayable
    pub fn database(message: impl std::fmt::Display) -> Self {
        DomainError::Database {
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::BadRequest,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } | DomainError::Database { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => match err {
                AuthError::AccessDenied => ErrorKind::Forbidden,
                AuthError::PasswordSameAsOld => ErrorKind::BadRequest,
                _ => ErrorKind::Unauthorized,
            },
            DomainError::Token(err) => match err {
                TokenError::TokenGenerationFailed => ErrorKind::Internal,
                _ => ErrorKind::Unauthorized,
            },
            DomainError::User(err) => match err {
                UserError::NotFound => ErrorKind::NotFound,
                UserError::EmailInUse { .. } => ErrorKind::BadRequest,
                UserError::DefaultPasswordNotSet => ErrorKind::Internal,
            },
        }
    }

    /// Stable machine-readable code returned to clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Database { .. } => error_codes::DATABASE_ERROR,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
                AuthError::AccountDeleted => error_codes::ACCOUNT_DELETED,
                AuthError::AccountDisabled => error_codes::ACCOUNT_DISABLED,
                AuthError::UserNotFound => error_codes::USER_NOT_FOUND,
                AuthError::InvalidToken => error_codes::INVALID_TOKEN,
                AuthError::AccessDenied => error_codes::ACCESS_DENIED,
                AuthError::OldPasswordIncorrect => error_codes::OLD_PASSWORD_INCORRECT,
                AuthError::PasswordSameAsOld => error_codes::PASSWORD_SAME_AS_OLD,
            },
            DomainError::Token(err) => match err {
                TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
                _ => error_codes::INVALID_TOKEN,
            },
            DomainError::User(err) => match err {
                UserError::NotFound => error_codes::USER_NOT_FOUND,
                UserError::EmailInUse { .. } => error_codes::EMAIL_IN_USE,
                UserError::DefaultPasswordNotSet => error_codes::DEFAULT_PASSWORD_NOT_SET,
            },
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
