//! User service unit tests over a mocked repository.

use std::sync::Arc;

use mockall::predicate::eq;

use user_registry::domain::{User, UserChanges};
use user_registry::errors::AppError;
use user_registry::infra::MockUserRepository;
use user_registry::services::{UserManager, UserService};
use user_registry::types::PaginationParams;

fn test_user(id: i32) -> User {
    User {
        id,
        name: "Test User".to_string(),
        age: Some(30),
    }
}

#[tokio::test]
async fn get_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(test_user(id))));

    let service = UserManager::new(Arc::new(repo));
    let user = service.get_user(7).await.unwrap();
    assert_eq!(user.id, 7);
}

#[tokio::test]
async fn get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(7).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn create_user_trims_name_before_storing() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|name, age| name == "Alice" && *age == Some(30))
        .returning(|name, age| {
            Ok(User {
                id: 1,
                name,
                age,
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .create_user("  Alice  ".to_string(), Some(30))
        .await
        .unwrap();
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn create_user_rejects_blank_name() {
    // The repository must never be reached for an invalid name
    let repo = MockUserRepository::new();

    let service = UserManager::new(Arc::new(repo));
    let result = service.create_user("   ".to_string(), None).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn update_user_maps_missing_row_to_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update().returning(|_, _| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let changes = UserChanges {
        name: Some("Ghost".to_string()),
        age: None,
    };
    let result = service.update_user(9999, changes).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn update_user_validates_new_name() {
    let repo = MockUserRepository::new();

    let service = UserManager::new(Arc::new(repo));
    let changes = UserChanges {
        name: Some("   ".to_string()),
        age: None,
    };
    let result = service.update_user(1, changes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn delete_user_maps_false_to_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(4)).returning(|_| Ok(false));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(4).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(4)).returning(|_| Ok(true));

    let service = UserManager::new(Arc::new(repo));
    assert!(service.delete_user(4).await.is_ok());
}

#[tokio::test]
async fn paginate_users_builds_metadata() {
    let mut repo = MockUserRepository::new();
    repo.expect_paginate()
        .returning(|_| Ok((vec![test_user(1), test_user(2)], 5)));

    let service = UserManager::new(Arc::new(repo));
    let page = service
        .paginate_users(PaginationParams::new(1, 2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.per_page, 2);
}

#[tokio::test]
async fn paginate_users_normalizes_parameters() {
    let mut repo = MockUserRepository::new();
    repo.expect_paginate()
        .withf(|params| params.page == 1 && params.per_page == 10)
        .returning(|_| Ok((vec![], 0)));

    let service = UserManager::new(Arc::new(repo));
    let page = service
        .paginate_users(PaginationParams::new(0, 0))
        .await
        .unwrap();

    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.per_page, 10);
}
