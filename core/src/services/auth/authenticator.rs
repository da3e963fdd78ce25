//! Seam between the HTTP middleware and the auth service

use async_trait::async_trait;

use crate::domain::entities::user::{Role, User};
use crate::errors::{AuthError, DomainResult};

/// Resolves a bearer access token to the user it was issued for
///
/// The middleware holds this as a trait object so it does not need to be
/// generic over the repository types behind the auth service.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Fails with `InvalidToken`, `AccountDeleted` or `AccountDisabled`
    async fn authenticate(&self, access_token: &str) -> DomainResult<User>;

    /// Fails with `AccessDenied` unless the user holds one of `roles`
    fn authorize(&self, user: &User, roles: &[Role]) -> DomainResult<()> {
        if roles.contains(&user.role) {
            Ok(())
        } else {
            Err(AuthError::AccessDenied.into())
        }
    }
}
