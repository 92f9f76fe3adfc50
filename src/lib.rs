//! User Registry - CRUD over a single User entity
//!
//! A small service exposing create/read/update/delete, listing,
//! pagination and age-range filtering over `User { id, name, age }`
//! records, backed by SeaORM. The same data-access layer is driven by
//! an axum HTTP API and a clap CLI.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and validation
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # CRUD from the command line
//! cargo run -- users create Alice --age 30
//! cargo run -- users paginate --page 1 --per-page 10
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserChanges};
pub use errors::{AppError, AppResult};
pub use infra::Database;
