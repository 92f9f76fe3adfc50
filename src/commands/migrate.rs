//! Schema migration management for the users database.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Apply, roll back, inspect, or rebuild the schema.
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are managed explicitly here, so skip the auto-run
    // that Database::connect performs.
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Rolled back one migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-applying every migration");
            db.fresh_migrations().await?;
            tracing::info!("Database rebuilt");
        }
    }

    Ok(())
}
