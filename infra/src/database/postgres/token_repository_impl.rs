//! PostgreSQL implementation of the RefreshTokenRepository trait.
//!
//! Revocation is a conditional `UPDATE`, so the row count tells the caller
//! whether it won a concurrent refresh.

use async_trait::async_trait;
use lp_core::domain::entities::token::{
    RefreshToken, RefreshTokenPatch, RefreshTokenSortColumn, RevocationReason,
};
use lp_core::errors::{DomainError, DomainResult};
use lp_core::repositories::{RefreshTokenRepository, Repository};
use lp_shared::types::pagination::{PageRequest, PaginatedResult};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use super::query::push_order_and_page;
use crate::error::{decode_failed, query_failed};

const TOKEN_COLUMNS: &str =
    "id, jti, hashed_token, is_revoked, revoked_reason, user_id, created_at, updated_at";

/// PostgreSQL implementation of RefreshTokenRepository
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &PgRow) -> DomainResult<RefreshToken> {
        let revoked_reason: Option<String> = row.try_get("revoked_reason").map_err(decode_failed)?;
        let revoked_reason = revoked_reason
            .map(|reason| reason.parse::<RevocationReason>())
            .transpose()
            .map_err(DomainError::database)?;

        Ok(RefreshToken {
            id: row.try_get("id").map_err(decode_failed)?,
            jti: row.try_get("jti").map_err(decode_failed)?,
            hashed_token: row.try_get("hashed_token").map_err(decode_failed)?,
            is_revoked: row.try_get("is_revoked").map_err(decode_failed)?,
            revoked_reason,
            user_id: row.try_get("user_id").map_err(decode_failed)?,
            created_at: row.try_get("created_at").map_err(decode_failed)?,
            updated_at: row.try_get("updated_at").map_err(decode_failed)?,
        })
    }

    fn rows_to_tokens(rows: &[PgRow]) -> DomainResult<Vec<RefreshToken>> {
        rows.iter().map(Self::row_to_token).collect()
    }
}

#[async_trait]
impl Repository<RefreshToken> for PgRefreshTokenRepository {
    async fn find_all(&self) -> DomainResult<Vec<RefreshToken>> {
        let query = format!(
            "SELECT {} FROM refresh_tokens ORDER BY created_at DESC",
            TOKEN_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list refresh tokens", e))?;
        Self::rows_to_tokens(&rows)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RefreshToken>> {
        let query = format!("SELECT {} FROM refresh_tokens WHERE id = $1", TOKEN_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find refresh token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn create(&self, token: RefreshToken) -> DomainResult<RefreshToken> {
        let query = format!(
            r#"
            INSERT INTO refresh_tokens (
                id, jti, hashed_token, is_revoked, revoked_reason, user_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            TOKEN_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(token.id)
            .bind(&token.jti)
            .bind(&token.hashed_token)
            .bind(token.is_revoked)
            .bind(token.revoked_reason.map(|reason| reason.as_str()))
            .bind(token.user_id)
            .bind(token.created_at)
            .bind(token.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to save refresh token", e))?;

        tracing::debug!(jti = %token.jti, user_id = %token.user_id, "Refresh token stored");
        Self::row_to_token(&row)
    }

    /// Only a revocation changes anything; a record is never reactivated and
    /// keeps its first reason
    async fn update(&self, id: Uuid, patch: RefreshTokenPatch) -> DomainResult<Option<RefreshToken>> {
        let Some(reason) = patch.revoke else {
            return self.find_by_id(id).await;
        };

        let query = format!(
            "UPDATE refresh_tokens SET is_revoked = TRUE, \
             revoked_reason = COALESCE(revoked_reason, $2), updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            TOKEN_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(reason.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update refresh token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to delete refresh token", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_paginated(
        &self,
        request: &PageRequest<RefreshTokenSortColumn>,
    ) -> DomainResult<PaginatedResult<RefreshToken>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM refresh_tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to count refresh tokens", e))?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM refresh_tokens", TOKEN_COLUMNS));
        push_order_and_page(&mut select, request.sort_by.as_column(), request);
        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list refresh tokens", e))?;

        Ok(PaginatedResult::new(
            Self::rows_to_tokens(&rows)?,
            u64::try_from(total).unwrap_or_default(),
            request,
        ))
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn find_by_jti(&self, jti: &str) -> DomainResult<Option<RefreshToken>> {
        let query = format!("SELECT {} FROM refresh_tokens WHERE jti = $1", TOKEN_COLUMNS);
        let row = sqlx::query(&query)
            .bind(jti)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find refresh token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn revoke(&self, jti: &str, reason: RevocationReason) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET is_revoked = TRUE, revoked_reason = $2, updated_at = NOW() \
             WHERE jti = $1 AND is_revoked = FALSE",
        )
        .bind(jti)
        .bind(reason.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to revoke refresh token", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn revoke_all_for_user(&self, user_id: Uuid, reason: RevocationReason) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET is_revoked = TRUE, revoked_reason = $2, updated_at = NOW() \
             WHERE user_id = $1 AND is_revoked = FALSE",
        )
        .bind(user_id)
        .bind(reason.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to revoke refresh tokens of user", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_revoked(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE is_revoked = TRUE")
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to delete revoked refresh tokens", e))?;

        let removed = result.rows_affected();
        if removed > 0 {
            tracing::info!(removed, "Deleted revoked refresh tokens");
        }
        Ok(removed)
    }
}
