//! Main user service implementation

use std::sync::Arc;

use lp_shared::types::pagination::PaginatedResult;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserPatch};
use crate::domain::value_objects::{CreateUser, UserQuery};
use crate::errors::{DomainResult, UserError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

use super::config::UserServiceConfig;

/// Service for user CRUD, soft deletion and administrator password resets
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
    password_hasher: Arc<PasswordHasher>,
    config: UserServiceConfig,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<PasswordHasher>,
        config: UserServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            config,
        }
    }

    /// Create a user with the default password and `must_change_password`
    ///
    /// # Errors
    ///
    /// * `EmailInUse` - Any user, deleted or not, already has the email
    /// * `DefaultPasswordNotSet` - No default password is configured
    pub async fn create_user(&self, input: CreateUser) -> DomainResult<User> {
        let email = User::normalize_email(&input.email);
        self.ensure_email_free(&email, None).await?;

        let password_hash = self.default_password_hash().await?;

        let mut user = User::new(email, input.name.trim(), password_hash);
        user.phone = input.phone;
        user.is_active = input.is_active;
        user.role = input.role;
        user.must_change_password = true;

        let user = self.user_repository.create(user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, event = "user_created", "User created");
        Ok(user)
    }

    /// # Errors
    ///
    /// * `NotFound` - Unknown or soft-deleted user
    pub async fn get_user_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id_not_deleted(id)
            .await?
            .ok_or_else(|| UserError::NotFound.into())
    }

    /// All users that are not soft-deleted, newest first
    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all_not_deleted().await
    }

    pub async fn get_users_paginated(&self, query: UserQuery) -> DomainResult<PaginatedResult<User>> {
        let query = UserQuery {
            page: query.page.validate(),
            ..query
        };
        self.user_repository.search_paginated(&query).await
    }

    /// Apply the given fields to a user
    ///
    /// # Errors
    ///
    /// * `NotFound` - Unknown or soft-deleted user
    /// * `EmailInUse` - The new email belongs to another user
    pub async fn update_user_profile(&self, id: Uuid, mut patch: UserPatch) -> DomainResult<User> {
        let user = self.get_user_by_id(id).await?;

        if let Some(email) = patch.email.take() {
            let email = User::normalize_email(&email);
            if email != user.email {
                self.ensure_email_free(&email, Some(user.id)).await?;
            }
            patch.email = Some(email);
        }
        if let Some(name) = patch.name.take() {
            patch.name = Some(name.trim().to_string());
        }

        let updated = self
            .user_repository
            .update(user.id, patch)
            .await?
            .ok_or(UserError::NotFound)?;
        tracing::info!(user_id = %updated.id, event = "user_updated", "User profile updated");
        Ok(updated)
    }

    /// Reapply the default password and require a change on next login
    ///
    /// # Errors
    ///
    /// * `NotFound` - Unknown or soft-deleted user
    /// * `DefaultPasswordNotSet` - No default password is configured
    pub async fn reset_password_by_admin(&self, id: Uuid) -> DomainResult<User> {
        let user = self.get_user_by_id(id).await?;
        let password_hash = self.default_password_hash().await?;

        let updated = self
            .user_repository
            .update(user.id, UserPatch::password(password_hash, true))
            .await?
            .ok_or(UserError::NotFound)?;
        tracing::info!(user_id = %updated.id, event = "password_reset", "Password reset by administrator");
        Ok(updated)
    }

    /// Soft delete: sets the deletion timestamp, the row stays
    ///
    /// # Errors
    ///
    /// * `NotFound` - Unknown or already deleted user
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_repository.soft_delete(id).await? {
            return Err(UserError::NotFound.into());
        }
        tracing::info!(user_id = %id, event = "user_deleted", "User soft-deleted");
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<Uuid>) -> DomainResult<()> {
        match self.user_repository.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(UserError::EmailInUse {
                email: email.to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }

    async fn default_password_hash(&self) -> DomainResult<String> {
        let password = self
            .config
            .default_password
            .as_deref()
            .filter(|password| !password.is_empty())
            .ok_or_else(|| {
                tracing::error!("DEFAULT_PASSWORD is not configured");
                UserError::DefaultPasswordNotSet
            })?;
        self.password_hasher.hash(password).await
    }
}
