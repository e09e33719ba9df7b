//! Unit tests for the in-memory user repository

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_find_by_phone() {
    let repo = MockUserRepository::with_users([
        User::new(1, 447700900123),
        User::new(2, 14155550100),
    ]);

    let found = repo.find_by_phone(14155550100).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(2));

    assert!(repo.find_by_phone(33612345678).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_verification_id() {
    let mut user = User::new(1, 447700900123);
    user.start_verification("req-abc");
    let repo = MockUserRepository::with_users([user, User::new(2, 14155550100)]);

    let found = repo.find_by_verification_id("req-abc").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(1));

    assert!(repo.find_by_verification_id("req-other").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_persists_changes() {
    let repo = MockUserRepository::with_users([User::new(1, 447700900123)]);

    let mut user = repo.find_by_id(1).await.unwrap().unwrap();
    user.start_verification("req-1");
    repo.update(user).await.unwrap();

    let stored = repo.get(1).await.unwrap();
    assert_eq!(stored.verification_id.as_deref(), Some("req-1"));
}

#[tokio::test]
async fn test_update_unknown_user() {
    let repo = MockUserRepository::new();
    let result = repo.update(User::new(99, 14155550100)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_insert_replaces_existing() {
    let repo = MockUserRepository::new();
    repo.insert(User::new(1, 447700900123)).await;
    repo.insert(User::new(1, 14155550100)).await;

    assert_eq!(repo.get(1).await.unwrap().phone, 14155550100);
}
