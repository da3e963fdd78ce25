//! In-memory implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, RevocationReason};
use crate::errors::DomainResult;
use crate::repositories::base::InMemoryRepository;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository for testing
pub type MockRefreshTokenRepository = InMemoryRepository<RefreshToken>;

#[async_trait]
impl RefreshTokenRepository for InMemoryRepository<RefreshToken> {
    async fn find_by_jti(&self, jti: &str) -> DomainResult<Option<RefreshToken>> {
        let tokens = self.items.read().await;
        Ok(tokens.iter().find(|token| token.jti == jti).cloned())
    }

    async fn revoke(&self, jti: &str, reason: RevocationReason) -> DomainResult<bool> {
        let mut tokens = self.items.write().await;
        Ok(tokens
            .iter_mut()
            .find(|token| token.jti == jti)
            .map_or(false, |token| token.revoke(reason)))
    }

    async fn revoke_all_for_user(&self, user_id: Uuid, reason: RevocationReason) -> DomainResult<u64> {
        let mut tokens = self.items.write().await;
        let mut revoked = 0;
        for token in tokens.iter_mut().filter(|token| token.user_id == user_id) {
            if token.revoke(reason) {
                revoked += 1;
            }
        }
        Ok(revoked)
    }

    async fn delete_revoked(&self) -> DomainResult<u64> {
        let mut tokens = self.items.write().await;
        let before = tokens.len();
        tokens.retain(|token| !token.is_revoked);
        Ok((before - tokens.len()) as u64)
    }
}
