//! Main authentication service implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, RevocationReason};
use crate::domain::entities::user::{User, UserPatch};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::authenticator::Authenticator;
use super::config::AuthServiceConfig;

/// Authentication service for login, token rotation and password changes
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Revocation ledger for refresh tokens
    token_repository: Arc<T>,
    /// JWT codec
    token_service: Arc<TokenService>,
    password_hasher: Arc<PasswordHasher>,
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_repository` - Repository for refresh token records
    /// * `token_service` - Service for JWT encoding and decoding
    /// * `password_hasher` - bcrypt hasher shared with the user service
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<PasswordHasher>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Log in with email and password
    ///
    /// An unknown email and a wrong password produce the same error, and
    /// both cost one bcrypt verification.
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AccountDeleted` - The user is soft-deleted
    /// * `AccountDisabled` - The user is inactive
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = User::normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.password_hasher.verify_dummy(password).await?;
                tracing::info!(event = "login_failed", reason = "unknown_email", "Login rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash).await? {
            tracing::info!(
                user_id = %user.id,
                event = "login_failed",
                reason = "wrong_password",
                "Login rejected"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        ensure_can_authenticate(&user)?;

        let response = self.issue_tokens(&user).await?;
        tracing::info!(user_id = %user.id, event = "login", "User logged in");
        Ok(response)
    }

    /// Revoke the refresh token's record
    ///
    /// A token without a jti, or whose record is missing or already
    /// revoked, is accepted as a successful logout.
    ///
    /// # Errors
    ///
    /// * `AccessDenied` - The token is invalid or expired
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let claims = self.token_service.verify_refresh_token(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "Logout with unverifiable refresh token");
            AuthError::AccessDenied
        })?;

        let Some(jti) = claims.jti else {
            return Ok(());
        };

        if self.token_repository.revoke(&jti, RevocationReason::Logout).await? {
            tracing::info!(jti = %jti, user_id = %claims.sub, event = "logout", "Refresh token revoked");
        } else {
            tracing::debug!(jti = %jti, "Logout for unknown or already revoked token");
        }
        Ok(())
    }

    /// Exchange a refresh token for a new pair, revoking the presented one
    ///
    /// # Errors
    ///
    /// * `AccessDenied` - Invalid or expired token, missing jti or subject,
    ///   unknown or revoked record, or digest mismatch
    /// * `UserNotFound` - The owner no longer exists
    /// * `AccountDeleted` / `AccountDisabled` - The owner may no longer log in
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let claims = self.token_service.verify_refresh_token(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "Refresh with unverifiable token");
            AuthError::AccessDenied
        })?;

        let jti = claims.jti.as_deref().ok_or(AuthError::AccessDenied)?;
        let user_id = claims.user_id().map_err(|_| AuthError::AccessDenied)?;

        let record = self
            .token_repository
            .find_by_jti(jti)
            .await?
            .ok_or(AuthError::AccessDenied)?;

        if record.user_id != user_id
            || !TokenService::verify_token_hash(refresh_token, &record.hashed_token)
        {
            tracing::warn!(jti = %jti, event = "refresh_mismatch", "Refresh token does not match its record");
            return Err(AuthError::AccessDenied.into());
        }

        if record.is_revoked {
            if record.was_rotated() {
                self.handle_reuse(&record).await?;
            } else {
                tracing::debug!(jti = %jti, reason = ?record.revoked_reason, "Refresh with revoked token");
            }
            return Err(AuthError::AccessDenied.into());
        }

        // Conditional revoke: a concurrent refresh of the same token loses here
        if !self.token_repository.revoke(jti, RevocationReason::Rotated).await? {
            tracing::warn!(jti = %jti, event = "refresh_race", "Refresh token revoked concurrently");
            return Err(AuthError::AccessDenied.into());
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        ensure_can_authenticate(&user)?;

        let response = self.issue_tokens(&user).await?;
        tracing::info!(user_id = %user.id, rotated_jti = %jti, event = "token_refreshed", "Refresh token rotated");
        Ok(response)
    }

    /// Change the password of a logged-in user
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - The user is missing or soft-deleted
    /// * `OldPasswordIncorrect` - `old_password` does not match
    /// * `PasswordSameAsOld` - `new_password` equals `old_password`
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_id_not_deleted(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.password_hasher.verify(old_password, &user.password_hash).await? {
            return Err(AuthError::OldPasswordIncorrect.into());
        }

        if old_password == new_password {
            return Err(AuthError::PasswordSameAsOld.into());
        }

        let password_hash = self.password_hasher.hash(new_password).await?;
        self.user_repository
            .update(user.id, UserPatch::password(password_hash, false))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %user.id, event = "password_changed", "Password changed");
        Ok(())
    }

    /// Generates a token pair and records the refresh token's digest
    async fn issue_tokens(&self, user: &User) -> DomainResult<AuthResponse> {
        let jti = Uuid::new_v4().to_string();
        let access_token = self.token_service.generate_access_token(user)?;
        let refresh_token = self.token_service.generate_refresh_token(user, &jti)?;

        self.token_repository
            .create(RefreshToken::new(
                jti,
                TokenService::hash_token(&refresh_token),
                user.id,
            ))
            .await?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            expires_in: self.token_service.access_expiry_seconds(),
            refresh_expires_in: self.token_service.refresh_expiry_seconds(),
            user: user.into(),
        })
    }

    /// A rotated token came back: treat the whole chain as compromised.
    /// Tokens revoked by logout never reach this.
    async fn handle_reuse(&self, record: &RefreshToken) -> DomainResult<()> {
        tracing::warn!(
            jti = %record.jti,
            user_id = %record.user_id,
            event = "refresh_token_reuse",
            "Revoked refresh token presented again"
        );

        if self.config.revoke_all_on_reuse {
            let revoked = self
                .token_repository
                .revoke_all_for_user(record.user_id, RevocationReason::ReuseDetected)
                .await?;
            tracing::warn!(user_id = %record.user_id, revoked = revoked, "Revoked all refresh tokens of user");
        }
        Ok(())
    }
}

#[async_trait]
impl<U, T> Authenticator for AuthService<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    async fn authenticate(&self, access_token: &str) -> DomainResult<User> {
        let claims = self
            .token_service
            .verify_access_token(access_token)
            .map_err(|_| AuthError::InvalidToken)?;
        let user_id = claims.user_id().map_err(|_| AuthError::InvalidToken)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        ensure_can_authenticate(&user)?;
        Ok(user)
    }
}

/// Soft-deleted and inactive users cannot authenticate
fn ensure_can_authenticate(user: &User) -> Result<(), AuthError> {
    if user.is_deleted() {
        return Err(AuthError::AccountDeleted);
    }
    if !user.is_active {
        return Err(AuthError::AccountDisabled);
    }
    Ok(())
}
