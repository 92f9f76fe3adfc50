//! Database connection and initialization.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management.
///
/// Constructed from an explicit [`Config`]; never reads the environment
/// itself. Owns the connection pool for its whole lifetime.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run pending migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;

        Migrator::up(&connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(Self { connection })
    }

    /// Connect without running migrations (for CLI migration commands).
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::{seaql_migrations, MigrationName};

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Rollback-scoped sessions for test isolation.
///
/// Protocol: connect, begin an outer transaction, hand out a store bound
/// to that transaction, and roll the transaction back at teardown. Every
/// write a test performs lands inside the still-open outer transaction,
/// so nothing survives the rollback and tests never need to truncate or
/// rebuild schema between cases.
#[cfg(feature = "test-utils")]
pub mod test_support {
    use sea_orm::{ConnectOptions, DatabaseTransaction, TransactionTrait};

    use super::*;
    use crate::infra::repositories::TxUserStore;

    /// Fresh in-memory SQLite database with migrations applied.
    ///
    /// The pool is pinned to a single connection: pooled `::memory:`
    /// connections each get a private database, and the rollback
    /// pattern needs every statement on the connection that holds the
    /// outer transaction.
    pub async fn memory_database() -> Result<Database, DbErr> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let connection = SeaDatabase::connect(options).await?;
        Migrator::up(&connection, None).await?;

        Ok(Database { connection })
    }

    /// A session whose writes are discarded at teardown.
    pub struct TestSession {
        txn: DatabaseTransaction,
    }

    impl TestSession {
        /// Begin the outer transaction on the database's connection.
        pub async fn begin(db: &Database) -> Result<Self, DbErr> {
            let txn = db.connection.begin().await?;
            Ok(Self { txn })
        }

        /// Repository bound to this session's transaction.
        pub fn users(&self) -> TxUserStore<'_> {
            TxUserStore::new(&self.txn)
        }

        /// Discard everything written through this session.
        pub async fn rollback(self) -> Result<(), DbErr> {
            self.txn.rollback().await
        }
    }
}
