//! Integration tests for the PostgreSQL repositories
//!
//! Run against a database with `sql/schema.sql` applied:
//! `DATABASE_URL=postgres://... cargo test -p lp_infra -- --ignored`

use lp_core::domain::entities::token::{RefreshToken, RevocationReason};
use lp_core::domain::entities::user::{Role, User, UserPatch, UserSortColumn};
use lp_core::domain::value_objects::UserQuery;
use lp_core::errors::{DomainError, UserError};
use lp_core::repositories::{RefreshTokenRepository, Repository, UserRepository};
use lp_infra::{DatabasePool, PgRefreshTokenRepository, PgUserRepository};
use lp_shared::config::DatabaseConfig;
use lp_shared::types::pagination::{PageRequest, SortOrder};
use uuid::Uuid;

async fn pool() -> DatabasePool {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lp_infra=debug,sqlx=warn")
        .with_test_writer()
        .try_init();

    DatabasePool::new(&DatabaseConfig::from_env().with_max_connections(2))
        .await
        .unwrap()
}

fn unique_user(name: &str) -> User {
    let email = format!("{}-{}@integration.test", name, Uuid::new_v4());
    User::new(email, name, "$2b$04$integration.placeholder.hash")
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_user_repository_operations() {
    let pool = pool().await;
    let repo = PgUserRepository::new(pool.get_pool().clone());

    let mut user = unique_user("Integration");
    user.role = Role::Admin;
    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.email, user.email);
    assert_eq!(created.role, Role::Admin);

    let duplicate = repo.create(User::new(&user.email, "Again", "hash")).await;
    assert!(matches!(
        duplicate,
        Err(DomainError::User(UserError::EmailInUse { .. }))
    ));

    let patch = UserPatch {
        name: Some("Renamed".to_string()),
        is_active: Some(false),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(!updated.is_active);

    assert!(repo.soft_delete(created.id).await.unwrap());
    assert!(!repo.soft_delete(created.id).await.unwrap());
    assert!(repo.find_by_id_not_deleted(created.id).await.unwrap().is_none());
    assert!(repo.find_by_email(&user.email).await.unwrap().is_some());

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_user_search_paginated() {
    let pool = pool().await;
    let repo = PgUserRepository::new(pool.get_pool().clone());

    let marker = Uuid::new_v4().simple().to_string();
    let mut ids = Vec::new();
    for name in ["Alpha", "Beta", "Gamma"] {
        let user = User::new(format!("{}-{}@search.test", name.to_lowercase(), marker), name, "hash");
        ids.push(repo.create(user).await.unwrap().id);
    }

    let query = UserQuery::new(
        PageRequest::new(2, 2, UserSortColumn::Name, SortOrder::Asc),
        Some(marker.clone()),
    );
    let page = repo.search_paginated(&query).await.unwrap();
    assert_eq!(page.meta.total_items, 3);
    assert_eq!(page.meta.total_pages, 2);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Gamma");

    for id in ids {
        repo.delete(id).await.unwrap();
    }
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_refresh_token_revocation() {
    let pool = pool().await;
    let users = PgUserRepository::new(pool.get_pool().clone());
    let tokens = PgRefreshTokenRepository::new(pool.get_pool().clone());

    let owner = users.create(unique_user("TokenOwner")).await.unwrap();
    let jti = Uuid::new_v4().to_string();
    tokens
        .create(RefreshToken::new(&jti, "a".repeat(64), owner.id))
        .await
        .unwrap();
    tokens
        .create(RefreshToken::new(Uuid::new_v4().to_string(), "b".repeat(64), owner.id))
        .await
        .unwrap();

    assert!(tokens.revoke(&jti, RevocationReason::Rotated).await.unwrap());
    assert!(!tokens.revoke(&jti, RevocationReason::Logout).await.unwrap());
    let record = tokens.find_by_jti(&jti).await.unwrap().unwrap();
    assert!(record.is_revoked);
    assert!(record.was_rotated());

    assert_eq!(
        tokens
            .revoke_all_for_user(owner.id, RevocationReason::ReuseDetected)
            .await
            .unwrap(),
        1
    );

    // Deleting the owner cascades to its tokens
    users.delete(owner.id).await.unwrap();
    assert!(tokens.find_by_jti(&jti).await.unwrap().is_none());
}
