//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use lp_shared::types::pagination::PaginatedResult;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::UserQuery;
use crate::errors::DomainResult;
use crate::repositories::base::InMemoryRepository;

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub type MockUserRepository = InMemoryRepository<User>;

fn matches_search(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.items.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id_not_deleted(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.items.read().await;
        Ok(users
            .iter()
            .find(|user| user.id == id && !user.is_deleted())
            .cloned())
    }

    async fn find_all_not_deleted(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self
            .items
            .read()
            .await
            .iter()
            .filter(|user| !user.is_deleted())
            .cloned()
            .collect();
        Self::newest_first(&mut users);
        Ok(users)
    }

    async fn search_paginated(&self, query: &UserQuery) -> DomainResult<PaginatedResult<User>> {
        let users: Vec<User> = self
            .items
            .read()
            .await
            .iter()
            .filter(|user| !user.is_deleted())
            .filter(|user| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |term| matches_search(user, term))
            })
            .cloned()
            .collect();

        Ok(Self::paginate(users, &query.page))
    }

    async fn soft_delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut users = self.items.write().await;
        match users.iter_mut().find(|user| user.id == id && !user.is_deleted()) {
            Some(user) => {
                user.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
