//! Tests for the generic in-memory repository

use chrono::{Duration, Utc};
use lp_shared::types::pagination::{PageRequest, SortOrder};

use crate::domain::entities::user::{User, UserPatch, UserSortColumn};
use crate::repositories::base::{InMemoryRepository, Repository};

fn user(name: &str, minutes_ago: i64) -> User {
    let mut user = User::new(format!("{}@example.com", name.to_lowercase()), name, "hash");
    user.created_at = Utc::now() - Duration::minutes(minutes_ago);
    user
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let repo = InMemoryRepository::<User>::new();
    let created = repo.create(user("Ana", 0)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_create_rejects_duplicate_id() {
    let repo = InMemoryRepository::<User>::new();
    let ana = user("Ana", 0);
    repo.create(ana.clone()).await.unwrap();

    assert!(repo.create(ana).await.is_err());
}

#[tokio::test]
async fn test_find_all_is_newest_first() {
    let repo = InMemoryRepository::with_items(vec![user("Old", 30), user("New", 1), user("Mid", 10)]);

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["New", "Mid", "Old"]);
}

#[tokio::test]
async fn test_update_is_partial() {
    let repo = InMemoryRepository::<User>::new();
    let ana = repo.create(user("Ana", 0)).await.unwrap();

    let updated = repo
        .update(
            ana.id,
            UserPatch {
                name: Some("Ana Clara".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Ana Clara");
    assert_eq!(updated.email, ana.email);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = InMemoryRepository::<User>::new();
    let result = repo
        .update(uuid::Uuid::new_v4(), UserPatch::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryRepository::<User>::new();
    let ana = repo.create(user("Ana", 0)).await.unwrap();

    assert!(repo.delete(ana.id).await.unwrap());
    assert!(!repo.delete(ana.id).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_paginated_last_page_holds_remainder() {
    let users: Vec<User> = (0..23).map(|i| user(&format!("User{:02}", i), i)).collect();
    let repo = InMemoryRepository::with_items(users);

    let request = PageRequest::new(3, 10, UserSortColumn::Name, SortOrder::Asc);
    let page = repo.find_paginated(&request).await.unwrap();

    assert_eq!(page.meta.total_items, 23);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.meta.item_count, 3);
    assert_eq!(page.meta.current_page, 3);
    assert_eq!(page.data[0].name, "User20");
}

#[tokio::test]
async fn test_paginated_evenly_divisible_last_page_is_full() {
    let users: Vec<User> = (0..20).map(|i| user(&format!("User{:02}", i), i)).collect();
    let repo = InMemoryRepository::with_items(users);

    let request = PageRequest::new(2, 10, UserSortColumn::Name, SortOrder::Asc);
    let page = repo.find_paginated(&request).await.unwrap();

    assert_eq!(page.meta.total_pages, 2);
    assert_eq!(page.meta.item_count, 10);
}

#[tokio::test]
async fn test_paginated_descending() {
    let repo = InMemoryRepository::with_items(vec![user("Bruno", 0), user("Ana", 0), user("Carla", 0)]);

    let request = PageRequest::new(1, 2, UserSortColumn::Name, SortOrder::Desc);
    let page = repo.find_paginated(&request).await.unwrap();

    let names: Vec<&str> = page.data.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Carla", "Bruno"]);
    assert_eq!(page.meta.total_pages, 2);
}

#[tokio::test]
async fn test_paginated_beyond_last_page_is_empty() {
    let repo = InMemoryRepository::with_items(vec![user("Ana", 0)]);

    let request = PageRequest::new(5, 10, UserSortColumn::Name, SortOrder::Asc);
    let page = repo.find_paginated(&request).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.meta.total_items, 1);
    assert_eq!(page.meta.total_pages, 1);
}
