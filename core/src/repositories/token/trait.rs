//! Refresh token repository trait, the revocation ledger behind logout and
//! token rotation.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{
    RefreshToken, RefreshTokenPatch, RefreshTokenSortColumn, RevocationReason,
};
use crate::errors::DomainResult;
use crate::repositories::base::{Entity, Repository};

impl Entity for RefreshToken {
    type Patch = RefreshTokenPatch;
    type SortColumn = RefreshTokenSortColumn;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: RefreshTokenPatch) {
        if let Some(reason) = patch.revoke {
            self.revoke(reason);
        }
    }

    fn compare_by(&self, other: &Self, column: RefreshTokenSortColumn) -> Ordering {
        match column {
            RefreshTokenSortColumn::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

/// Repository trait for RefreshToken persistence
///
/// Only hashed tokens are stored. Records are keyed by `jti` and move one
/// way, from active to revoked.
#[async_trait]
pub trait RefreshTokenRepository: Repository<RefreshToken> {
    /// Find a token record by its jti, revoked or not
    async fn find_by_jti(&self, jti: &str) -> DomainResult<Option<RefreshToken>>;

    /// Revoke the record with `jti` if it is still active, recording `reason`
    ///
    /// This is a single conditional write: of two concurrent callers at most
    /// one observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - The record was active and is now revoked
    /// * `Ok(false)` - No such record, or it was already revoked
    async fn revoke(&self, jti: &str, reason: RevocationReason) -> DomainResult<bool>;

    /// Revoke every active token of a user, returning how many were revoked
    async fn revoke_all_for_user(&self, user_id: Uuid, reason: RevocationReason) -> DomainResult<u64>;

    /// Permanently remove revoked records, returning how many were removed
    async fn delete_revoked(&self) -> DomainResult<u64>;
}
