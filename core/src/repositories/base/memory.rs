//! In-memory repository used by unit tests and downstream test suites

use std::sync::Arc;

use async_trait::async_trait;
use lp_shared::types::pagination::{PageRequest, PaginatedResult, SortOrder};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

use super::r#trait::{Entity, Repository};

/// Vec-backed store implementing [`Repository`] for any [`Entity`]
pub struct InMemoryRepository<E: Entity> {
    pub(crate) items: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-populated with `items`
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Snapshot of everything stored, in insertion order
    pub async fn snapshot(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Sorts and slices `rows` the way the SQL implementations do
    pub(crate) fn paginate(mut rows: Vec<E>, request: &PageRequest<E::SortColumn>) -> PaginatedResult<E> {
        rows.sort_by(|a, b| {
            let ordering = a.compare_by(b, request.sort_by);
            match request.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = rows.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let page: Vec<E> = rows
            .into_iter()
            .skip(offset)
            .take(request.limit as usize)
            .collect();

        PaginatedResult::new(page, total, request)
    }

    pub(crate) fn newest_first(rows: &mut [E]) {
        rows.sort_by_key(|row| std::cmp::Reverse(row.created_at()));
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> DomainResult<Vec<E>> {
        let mut rows = self.items.read().await.clone();
        Self::newest_first(&mut rows);
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, entity: E) -> DomainResult<E> {
        let mut items = self.items.write().await;

        if items.iter().any(|item| item.id() == entity.id()) {
            return Err(DomainError::database(format!(
                "duplicate key value violates primary key: {}",
                entity.id()
            )));
        }

        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: Uuid, patch: E::Patch) -> DomainResult<Option<E>> {
        let mut items = self.items.write().await;
        Ok(items.iter_mut().find(|item| item.id() == id).map(|item| {
            item.apply_patch(patch);
            item.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        Ok(items.len() != before)
    }

    async fn find_paginated(
        &self,
        request: &PageRequest<E::SortColumn>,
    ) -> DomainResult<PaginatedResult<E>> {
        let rows = self.items.read().await.clone();
        Ok(Self::paginate(rows, request))
    }
}
