//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{TxUserStore, UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(feature = "test-utils")]
pub use user_repository::MockUserRepository;
