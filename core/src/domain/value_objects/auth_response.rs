//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use super::user_profile::UserProfile;

/// Authentication response containing a fresh token pair and the user
///
/// Returned by both login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining a new pair
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,

    pub user: UserProfile,
}
