//! PostgreSQL implementation of the UserRepository trait.
//!
//! Queries are checked at runtime. Partial updates and paginated listings
//! are assembled with `QueryBuilder`.

use async_trait::async_trait;
use lp_core::domain::entities::user::{Role, User, UserPatch, UserSortColumn};
use lp_core::domain::value_objects::UserQuery;
use lp_core::errors::{DomainError, DomainResult, UserError};
use lp_core::repositories::{Repository, UserRepository};
use lp_shared::types::pagination::{PageRequest, PaginatedResult};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use super::query::{push_order_and_page, push_user_filters};
use crate::error::{decode_failed, is_unique_violation, query_failed};

const USER_COLUMNS: &str = "id, email, name, phone, password_hash, is_active, role, \
     must_change_password, deleted_at, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> DomainResult<User> {
        let role: String = row.try_get("role").map_err(decode_failed)?;
        let role: Role = role.parse().map_err(DomainError::database)?;

        Ok(User {
            id: row.try_get("id").map_err(decode_failed)?,
            email: row.try_get("email").map_err(decode_failed)?,
            name: row.try_get("name").map_err(decode_failed)?,
            phone: row.try_get("phone").map_err(decode_failed)?,
            password_hash: row.try_get("password_hash").map_err(decode_failed)?,
            is_active: row.try_get("is_active").map_err(decode_failed)?,
            role,
            must_change_password: row.try_get("must_change_password").map_err(decode_failed)?,
            deleted_at: row.try_get("deleted_at").map_err(decode_failed)?,
            created_at: row.try_get("created_at").map_err(decode_failed)?,
            updated_at: row.try_get("updated_at").map_err(decode_failed)?,
        })
    }

    fn rows_to_users(rows: &[PgRow]) -> DomainResult<Vec<User>> {
        rows.iter().map(Self::row_to_user).collect()
    }

    /// A unique violation on write means the email belongs to someone else
    fn write_failed(context: &'static str, email: &str, err: sqlx::Error) -> DomainError {
        if is_unique_violation(&err) {
            return UserError::EmailInUse {
                email: email.to_string(),
            }
            .into();
        }
        query_failed(context, err)
    }

    async fn fetch_page(
        &self,
        search: Option<&str>,
        exclude_deleted: bool,
        request: &PageRequest<UserSortColumn>,
    ) -> DomainResult<PaginatedResult<User>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users");
        push_user_filters(&mut count, search, exclude_deleted);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to count users", e))?;

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM users", USER_COLUMNS));
        push_user_filters(&mut select, search, exclude_deleted);
        push_order_and_page(&mut select, request.sort_by.as_column(), request);
        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list users", e))?;

        let users = Self::rows_to_users(&rows)?;
        Ok(PaginatedResult::new(
            users,
            u64::try_from(total).unwrap_or_default(),
            request,
        ))
    }
}

#[async_trait]
impl Repository<User> for PgUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let query = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list users", e))?;
        Self::rows_to_users(&rows)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let query = format!(
            r#"
            INSERT INTO users (
                id, email, name, phone, password_hash, is_active, role,
                must_change_password, deleted_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.role.as_str())
            .bind(user.must_change_password)
            .bind(user.deleted_at)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::write_failed("Failed to create user", &user.email, e))?;

        Self::row_to_user(&row)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> DomainResult<Option<User>> {
        let email = patch.email.clone();

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE users SET updated_at = NOW()");
        if let Some(value) = patch.email {
            builder.push(", email = ").push_bind(value);
        }
        if let Some(value) = patch.name {
            builder.push(", name = ").push_bind(value);
        }
        if let Some(value) = patch.phone {
            builder.push(", phone = ").push_bind(value);
        }
        if let Some(value) = patch.is_active {
            builder.push(", is_active = ").push_bind(value);
        }
        if let Some(value) = patch.role {
            builder.push(", role = ").push_bind(value.as_str());
        }
        if let Some(value) = patch.password_hash {
            builder.push(", password_hash = ").push_bind(value);
        }
        if let Some(value) = patch.must_change_password {
            builder.push(", must_change_password = ").push_bind(value);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(USER_COLUMNS);

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::write_failed("Failed to update user", email.as_deref().unwrap_or_default(), e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_paginated(
        &self,
        request: &PageRequest<UserSortColumn>,
    ) -> DomainResult<PaginatedResult<User>> {
        self.fetch_page(None, false, request).await
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1 LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id_not_deleted(&self, id: Uuid) -> DomainResult<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE id = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_all_not_deleted(&self) -> DomainResult<Vec<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE deleted_at IS NULL ORDER BY created_at DESC",
            USER_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list users", e))?;
        Self::rows_to_users(&rows)
    }

    async fn search_paginated(&self, query: &UserQuery) -> DomainResult<PaginatedResult<User>> {
        self.fetch_page(query.search.as_deref(), true, &query.page).await
    }

    async fn soft_delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to soft-delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
