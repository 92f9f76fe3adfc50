//! Users command - CRUD operations from the command line.
//!
//! Same data-access layer as the HTTP API; output is one
//! `id: name (age)` line per user.

use std::sync::Arc;

use crate::cli::args::{UserAction, UsersArgs};
use crate::config::Config;
use crate::domain::UserChanges;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};
use crate::types::PaginationParams;

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let repo = Arc::new(UserStore::new(db.get_connection()));
    let service = UserManager::new(repo);

    match args.action {
        UserAction::Create { name, age } => {
            let user = service.create_user(name, age).await?;
            println!("Created: {} {} ({})", user.id, user.name, user.display_age());
        }
        UserAction::Get { id } => match service.get_user(id).await {
            Ok(user) => println!("{}", user.display_line()),
            Err(AppError::NotFound) => println!("Not found"),
            Err(e) => return Err(e),
        },
        UserAction::Update {
            id,
            name,
            age,
            clear_age,
        } => {
            let changes = UserChanges {
                name,
                age: if clear_age { Some(None) } else { age.map(Some) },
            };

            match service.update_user(id, changes).await {
                Ok(user) => println!("Updated: {} {} ({})", user.id, user.name, user.display_age()),
                Err(AppError::NotFound) => println!("Not found"),
                Err(e) => return Err(e),
            }
        }
        UserAction::Delete { id } => match service.delete_user(id).await {
            Ok(()) => println!("Deleted"),
            Err(AppError::NotFound) => println!("Not found"),
            Err(e) => return Err(e),
        },
        UserAction::List { limit, offset } => {
            for user in service.list_users(limit, offset).await? {
                println!("{}", user.display_line());
            }
        }
        UserAction::Paginate { page, per_page } => {
            let page = service
                .paginate_users(PaginationParams::new(page, per_page))
                .await?;
            println!(
                "Page {} ({} per page) - total: {}",
                page.meta.page, page.meta.per_page, page.meta.total
            );
            for user in page.items {
                println!("{}", user.display_line());
            }
        }
        UserAction::Filter { min_age, max_age } => {
            for user in service.filter_users_by_age(min_age, max_age).await? {
                println!("{}", user.display_line());
            }
        }
    }

    Ok(())
}
