//! Domain-specific error types for authentication, tokens and user management
//!
//! Messages here are for logs. The localized messages shown to clients are
//! configured in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password, deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account deleted")]
    AccountDeleted,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("User not found")]
    UserNotFound,

    /// Missing, malformed or expired access token
    #[error("Invalid token")]
    InvalidToken,

    /// Insufficient role, or a refresh token that is invalid, revoked or reused
    #[error("Access denied")]
    AccessDenied,

    #[error("Old password incorrect")]
    OldPasswordIncorrect,

    #[error("New password must differ from the old one")]
    PasswordSameAsOld,
}

/// Token encoding and decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// User management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email already in use: {email}")]
    EmailInUse { email: String },

    #[error("Default password is not configured")]
    DefaultPasswordNotSet,
}
