//! Infrastructure layer - External systems integration
//!
//! Database connections, SeaORM repositories and migrations.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{TxUserStore, UserRepository, UserStore};

#[cfg(feature = "test-utils")]
pub use db::test_support;
#[cfg(feature = "test-utils")]
pub use repositories::MockUserRepository;
