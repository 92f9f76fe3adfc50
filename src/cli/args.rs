//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// User Registry - CRUD over the User entity via HTTP or the command line
#[derive(Parser, Debug)]
#[command(name = "user-registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage users from the command line
    Users(UsersArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// User management actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create a user
    Create {
        /// Display name
        name: String,
        /// Optional age
        #[arg(long)]
        age: Option<i32>,
    },
    /// Look up a user by id
    Get {
        id: i32,
    },
    /// Update a user's name and/or age
    Update {
        id: i32,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New age
        #[arg(long, conflicts_with = "clear_age")]
        age: Option<i32>,
        /// Remove the stored age
        #[arg(long)]
        clear_age: bool,
    },
    /// Delete a user by id
    Delete {
        id: i32,
    },
    /// List users in id order
    List {
        /// Maximum number of rows to print
        #[arg(long)]
        limit: Option<u64>,
        /// Rows to skip (negative offsets are rejected at parse time)
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Print one page of users
    Paginate {
        #[arg(long, default_value_t = DEFAULT_PAGE_NUMBER)]
        page: u64,
        #[arg(long = "per-page", default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u64,
    },
    /// List users within an inclusive age range
    Filter {
        #[arg(long)]
        min_age: Option<i32>,
        #[arg(long)]
        max_age: Option<i32>,
    },
}
