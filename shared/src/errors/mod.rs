//! Shared error response structure and error codes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes returned in the `error` field
pub mod error_codes {
    // Authentication
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const ACCOUNT_DELETED: &str = "ACCOUNT_DELETED";
    pub const ACCOUNT_DISABLED: &str = "ACCOUNT_DISABLED";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const OLD_PASSWORD_INCORRECT: &str = "OLD_PASSWORD_INCORRECT";
    pub const PASSWORD_SAME_AS_OLD: &str = "PASSWORD_SAME_AS_OLD";

    // Users
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const EMAIL_IN_USE: &str = "EMAIL_IN_USE";
    pub const DEFAULT_PASSWORD_NOT_SET: &str = "DEFAULT_PASSWORD_NOT_SET";

    // General
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}
