use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        favorite::FavoriteDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - All users ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with this ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List the favorites of a user.
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db, state.favorite_scope)
        .get_by_user(id)
        .await?;

    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a user.
///
/// # Returns
/// - `200 OK` - The created user
/// - `400 Bad Request` - Malformed body or blank required field
/// - `409 Conflict` - Email or username already registered
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = MessageDto),
        (status = 409, description = "Email or username already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the fields present in the body.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Malformed body or blank field
/// - `404 Not Found` - No user with this ID
/// - `409 Conflict` - Email or username belongs to another user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 409, description = "Email or username already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user and every favorite referencing it.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
