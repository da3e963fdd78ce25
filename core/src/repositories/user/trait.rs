//! User repository trait defining the interface for user persistence.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lp_shared::types::pagination::PaginatedResult;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserPatch, UserSortColumn};
use crate::domain::value_objects::UserQuery;
use crate::errors::DomainResult;
use crate::repositories::base::{Entity, Repository};

impl Entity for User {
    type Patch = UserPatch;
    type SortColumn = UserSortColumn;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        User::apply_patch(self, patch);
    }

    fn compare_by(&self, other: &Self, column: UserSortColumn) -> Ordering {
        match column {
            UserSortColumn::Id => self.id.cmp(&other.id),
            UserSortColumn::Name => self.name.cmp(&other.name),
            UserSortColumn::Email => self.email.cmp(&other.email),
            UserSortColumn::IsActive => self.is_active.cmp(&other.is_active),
            UserSortColumn::Role => self.role.as_str().cmp(other.role.as_str()),
            UserSortColumn::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

/// Repository trait for User entity persistence operations
///
/// The generic [`Repository`] methods see every row, soft-deleted or not.
/// The `*_not_deleted` variants and [`UserRepository::search_paginated`]
/// hide rows whose `deleted_at` is set.
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Find a user by email, including soft-deleted users
    ///
    /// Login and the uniqueness check on create both need to see deleted
    /// rows, since the email column stays unique.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by id, ignoring soft-deleted users
    async fn find_by_id_not_deleted(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// All users that are not soft-deleted, newest first
    async fn find_all_not_deleted(&self) -> DomainResult<Vec<User>>;

    /// One page of non-deleted users, optionally filtered by a
    /// case-insensitive search on name or email
    async fn search_paginated(&self, query: &UserQuery) -> DomainResult<PaginatedResult<User>>;

    /// Set `deleted_at` on a user that is not already deleted
    ///
    /// # Returns
    /// * `Ok(true)` - The user was marked deleted
    /// * `Ok(false)` - No such user, or already deleted
    async fn soft_delete(&self, id: Uuid) -> DomainResult<bool>;
}
