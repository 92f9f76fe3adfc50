//! User repository: CRUD, listing, pagination and age-range filtering.
//!
//! All query logic lives in [`queries`], written once against
//! `ConnectionTrait` so the same code serves the pooled production
//! connection ([`UserStore`]) and a borrowed transaction
//! ([`TxUserStore`]), including the rollback-scoped test sessions.
//!
//! Absence is a sentinel here, never an error: lookups return `None`,
//! deletes return `false`. Storage failures propagate as
//! `AppError::Database` unmodified. Name validation is deliberately not
//! this layer's concern; the service layer owns it.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::domain::{User, UserChanges};
use crate::errors::AppResult;
use crate::types::PaginationParams;

#[cfg(feature = "test-utils")]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the materialized row with its
    /// storage-assigned id.
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User>;

    /// Point lookup by primary key; `None` when no row matches.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Apply a change set to an existing user. Returns `None` without
    /// side effects when the id is absent.
    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<Option<User>>;

    /// Delete by primary key; `true` if a row was removed.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// List users ordered by ascending id, skipping `offset` rows and
    /// capped at `limit` when given.
    async fn list(&self, limit: Option<u64>, offset: u64) -> AppResult<Vec<User>>;

    /// Total number of users.
    async fn count(&self) -> AppResult<u64>;

    /// One page of users plus the unfiltered total row count.
    async fn paginate(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Users with age within the inclusive bounds, ordered by ascending
    /// id. Absent bounds are ignored; both absent returns all rows.
    async fn filter_by_age_range(
        &self,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>>;
}

/// Query implementations shared by every session kind.
pub(crate) mod queries {
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
        QueryOrder, QuerySelect, Set,
    };

    use super::super::entities::user::{self, ActiveModel, Entity as UserEntity};
    use crate::domain::{User, UserChanges};
    use crate::errors::{AppError, AppResult};
    use crate::types::PaginationParams;

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        name: String,
        age: Option<i32>,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(name),
            age: Set(age),
            ..Default::default()
        };

        let model = active_model.insert(conn).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        changes: UserChanges,
    ) -> AppResult<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };

        // An empty change set would produce an UPDATE with no columns,
        // which SeaORM rejects; the current row is already the answer.
        if changes.is_empty() {
            return Ok(Some(User::from(model)));
        }

        let mut active: ActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(age) = changes.age {
            active.age = Set(age);
        }

        let model = active.update(conn).await.map_err(AppError::from)?;
        Ok(Some(User::from(model)))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        limit: Option<u64>,
        offset: u64,
    ) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(conn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> AppResult<u64> {
        UserEntity::find().count(conn).await.map_err(AppError::from)
    }

    pub async fn paginate<C: ConnectionTrait>(
        conn: &C,
        params: &PaginationParams,
    ) -> AppResult<(Vec<User>, u64)> {
        let params = params.normalized();

        // The total is the full row count, independent of the window.
        let total = count(conn).await?;
        let items = list(conn, Some(params.limit()), params.offset()).await?;

        Ok((items, total))
    }

    pub async fn filter_by_age_range<C: ConnectionTrait>(
        conn: &C,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>> {
        let mut query = UserEntity::find();

        if let Some(min_age) = min_age {
            query = query.filter(user::Column::Age.gte(min_age));
        }
        if let Some(max_age) = max_age {
            query = query.filter(user::Column::Age.lte(max_age));
        }

        let models = query
            .order_by_asc(user::Column::Id)
            .all(conn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

/// Production repository bound to the pooled database connection.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User> {
        queries::create(&self.db, name, age).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<Option<User>> {
        queries::update(&self.db, id, changes).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        queries::delete(&self.db, id).await
    }

    async fn list(&self, limit: Option<u64>, offset: u64) -> AppResult<Vec<User>> {
        queries::list(&self.db, limit, offset).await
    }

    async fn count(&self) -> AppResult<u64> {
        queries::count(&self.db).await
    }

    async fn paginate(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        queries::paginate(&self.db, params).await
    }

    async fn filter_by_age_range(
        &self,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>> {
        queries::filter_by_age_range(&self.db, min_age, max_age).await
    }
}

/// Transaction-scoped repository.
///
/// Borrows the transaction so every operation runs inside it; the
/// borrow also keeps the store from outliving its session. Not intended
/// for concurrent use from multiple tasks.
pub struct TxUserStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserStore<'a> {
    /// Create a store bound to an open transaction
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for TxUserStore<'_> {
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User> {
        queries::create(self.txn, name, age).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        queries::find_by_id(self.txn, id).await
    }

    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<Option<User>> {
        queries::update(self.txn, id, changes).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        queries::delete(self.txn, id).await
    }

    async fn list(&self, limit: Option<u64>, offset: u64) -> AppResult<Vec<User>> {
        queries::list(self.txn, limit, offset).await
    }

    async fn count(&self) -> AppResult<u64> {
        queries::count(self.txn).await
    }

    async fn paginate(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        queries::paginate(self.txn, params).await
    }

    async fn filter_by_age_range(
        &self,
        min_age: Option<i32>,
        max_age: Option<i32>,
    ) -> AppResult<Vec<User>> {
        queries::filter_by_age_range(self.txn, min_age, max_age).await
    }
}
