//! User handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::domain::{CreateUserRequest, UpdateUserRequest, UserChanges, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// Age range filter query parameters
#[derive(Debug, Deserialize)]
pub struct AgeRangeQuery {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(filter_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.name, payload.age)
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "One page of users with pagination metadata")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    let page = state.user_service.paginate_users(params).await?;
    Ok(Json(page.map(UserResponse::from)))
}

/// Filter users by age range
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "Users",
    params(
        ("min_age" = Option<i32>, Query, description = "Inclusive lower age bound"),
        ("max_age" = Option<i32>, Query, description = "Inclusive upper age bound")
    ),
    responses(
        (status = 200, description = "Users within the age range", body = Vec<UserResponse>)
    )
)]
pub async fn filter_users(
    State(state): State<AppState>,
    Query(range): Query<AgeRangeQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .filter_users_by_age(range.min_age, range.max_age)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update user name and/or age
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(id, UserChanges::from(payload))
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}
