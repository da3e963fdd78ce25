//! Token entities for JWT-based authentication.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Role, User};

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    pub email: String,

    pub role: Role,

    /// Revocation key, only present in refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user` valid for `ttl_seconds` from now
    pub fn for_user(user: &User, jti: Option<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            jti,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Why a refresh token record was revoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationReason {
    /// The owner logged out with this token
    Logout,
    /// Exchanged for a new pair by a refresh
    Rotated,
    /// Revoked along with the rest of the owner's tokens
    ReuseDetected,
}

impl RevocationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevocationReason::Logout => "LOGOUT",
            RevocationReason::Rotated => "ROTATED",
            RevocationReason::ReuseDetected => "REUSE_DETECTED",
        }
    }
}

impl FromStr for RevocationReason {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "LOGOUT" => Ok(RevocationReason::Logout),
            "ROTATED" => Ok(RevocationReason::Rotated),
            "REUSE_DETECTED" => Ok(RevocationReason::ReuseDetected),
            other => Err(format!("unknown revocation reason: {}", other)),
        }
    }
}

/// Refresh token record stored in the database.
///
/// Only the SHA-256 digest of the issued token is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: Uuid,

    /// Unique token identifier, also carried in the token's `jti` claim
    pub jti: String,

    /// Hex-encoded SHA-256 of the issued token
    pub hashed_token: String,

    /// Revoked records are never reactivated
    pub is_revoked: bool,

    /// Set together with `is_revoked`
    pub revoked_reason: Option<RevocationReason>,

    /// Owning user
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn new(jti: impl Into<String>, hashed_token: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            jti: jti.into(),
            hashed_token: hashed_token.into(),
            is_revoked: false,
            revoked_reason: None,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the token as revoked; returns false when it already was, in
    /// which case the first reason is kept
    pub fn revoke(&mut self, reason: RevocationReason) -> bool {
        if self.is_revoked {
            return false;
        }
        self.is_revoked = true;
        self.revoked_reason = Some(reason);
        self.updated_at = Utc::now();
        true
    }

    /// A rotated token has already been exchanged for a newer one
    pub fn was_rotated(&self) -> bool {
        self.revoked_reason == Some(RevocationReason::Rotated)
    }
}

/// Partial update of a refresh token, used by the generic `Repository`
/// surface. Services revoke through `RefreshTokenRepository` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTokenPatch {
    /// Revocation is one-way; `None` leaves the record unchanged
    pub revoke: Option<RevocationReason>,
}

/// Sort column for the generic `Repository` listing of refresh tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RefreshTokenSortColumn {
    #[default]
    CreatedAt,
}

impl RefreshTokenSortColumn {
    pub fn as_column(&self) -> &'static str {
        match self {
            RefreshTokenSortColumn::CreatedAt => "created_at",
        }
    }
}
