//! User service - business logic over the user repository.
//!
//! Translates repository sentinels (`None`, `false`) into
//! `AppError::NotFound` for adapter convenience, and owns name
//! validation so every entry path that goes through a service is a
//! validated one.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user. The name is trimmed and must be non-empty.
    async fn create_user(&self, name: String, age: Option<i32>) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Apply a change set to a user
    async fn update_user(&self, id: i32, changes: UserChanges) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// List users in id order with optional limit and offset
    async fn list_users(&self, limit: Option<u64>, offset: u64) -> AppResult<Vec<User>>;

    /// One page of users with pagination metadata
    async fn paginate_users(&self, params: PaginationParams) -> AppResult<Paginated<User>>;

    /// Users within an inclusive age range, in id order
    async fn filter_users_by_age(
        &self,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Trim surrounding whitespace and reject empty names.
fn normalize_name(name: String) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, age: Option<i32>) -> AppResult<User> {
        let name = normalize_name(name)?;
        self.repo.create(name, age).await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        let changes = UserChanges {
            name: changes.name.map(normalize_name).transpose()?,
            age: changes.age,
        };

        self.repo.update(id, changes).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn list_users(&self, limit: Option<u64>, offset: u64) -> AppResult<Vec<User>> {
        self.repo.list(limit, offset).await
    }

    async fn paginate_users(&self, params: PaginationParams) -> AppResult<Paginated<User>> {
        let params = params.normalized();
        let (items, total) = self.repo.paginate(&params).await?;
        Ok(Paginated::new(items, params.page, params.per_page, total))
    }

    async fn filter_users_by_age(
        &self,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>> {
        self.repo.filter_by_age_range(min_age, max_age).await
    }
}
