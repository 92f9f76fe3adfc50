//! OpenAPI documentation definition.

use utoipa::OpenApi;

use crate::domain::{CreateUserRequest, UpdateUserRequest, User, UserResponse};

use super::handlers::user_handler;

/// API documentation root
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry API",
        description = "CRUD operations over the User entity with pagination and age-range filtering",
        version = "0.1.0"
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::filter_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(schemas(User, UserResponse, CreateUserRequest, UpdateUserRequest)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;
