//! Generic repository contract shared by every persisted entity.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lp_shared::types::pagination::{PageRequest, PaginatedResult};
use uuid::Uuid;

use crate::errors::DomainResult;

/// A persisted entity with a UUID key and a whitelisted set of sort columns
pub trait Entity: Clone + Send + Sync + 'static {
    /// Partial update; absent fields are left untouched
    type Patch: Send + Sync;

    /// Columns a paginated listing may be ordered by
    type SortColumn: Copy + Default + Send + Sync;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Ascending comparison on `column`, matching the database collation
    /// closely enough for the in-memory store
    fn compare_by(&self, other: &Self, column: Self::SortColumn) -> Ordering;
}

/// CRUD plus paginated listing, parameterized by entity type
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All rows, newest first
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>>;

    /// Insert a new row and return it as stored
    async fn create(&self, entity: E) -> DomainResult<E>;

    /// Apply `patch` to the row and return the updated entity, or `None`
    /// when no row has that id
    async fn update(&self, id: Uuid, patch: E::Patch) -> DomainResult<Option<E>>;

    /// Remove the row; returns whether one existed
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;

    /// One page of rows ordered by the requested column, with total counts
    async fn find_paginated(
        &self,
        request: &PageRequest<E::SortColumn>,
    ) -> DomainResult<PaginatedResult<E>>;
}
