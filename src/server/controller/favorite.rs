use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        favorite::{AddFavoriteDto, FavoriteDto},
    },
    server::{
        error::AppError, model::favorite::FavoriteOutcome, service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List every favorite.
#[utoipa::path(
    get,
    path = "/favorits",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "All favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db, state.favorite_scope)
        .get_all()
        .await?;

    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a favorite by ID.
#[utoipa::path(
    get,
    path = "/favorits/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "The favorite", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db, state.favorite_scope)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}

/// Add a favorite linking a user to an optional planet and character.
///
/// When the user already has favorites and a row holds the requested character, that
/// row's planet is replaced instead of inserting a new one.
///
/// # Returns
/// - `200 OK` - Favorite created or updated
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - User, planet or character does not exist
/// - `409 Conflict` - The favorite already exists
#[utoipa::path(
    post,
    path = "/favorite",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 200, description = "Favorite created or updated", body = MessageDto),
        (status = 400, description = "Invalid favorite data", body = MessageDto),
        (status = 404, description = "Referenced user, planet or character not found", body = MessageDto),
        (status = 409, description = "Favorite already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let outcome = FavoriteService::new(&state.db, state.favorite_scope)
        .add(payload.into())
        .await?;

    tracing::info!(
        "Favorite {} saved for user {}",
        outcome.favorite().id,
        outcome.favorite().user_id
    );

    let msg = match outcome {
        FavoriteOutcome::Created(_) => "Favorite added",
        FavoriteOutcome::Updated(_) => "Favorite updated",
    };

    Ok((StatusCode::OK, Json(MessageDto::new(msg))))
}

#[utoipa::path(
    delete,
    path = "/favorite/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db, state.favorite_scope)
        .remove(id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite deleted"))))
}

/// Add a planet favorite for a user that already has favorites.
///
/// # Returns
/// - `200 OK` - Favorite added
/// - `404 Not Found` - The user has no favorites, or the planet does not exist
/// - `409 Conflict` - The planet is already a favorite
#[utoipa::path(
    post,
    path = "/favorite/planet/{user_id}/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 409, description = "Planet is already a favorite", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db, state.favorite_scope)
        .add_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite planet added"))))
}

/// Remove the favorite linking a user to a planet.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{user_id}/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User or planet has no favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db, state.favorite_scope)
        .remove_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite planet deleted"))))
}

/// Add a character favorite for a user that already has favorites.
///
/// # Returns
/// - `200 OK` - Favorite added
/// - `404 Not Found` - The user has no favorites, or the character does not exist
/// - `409 Conflict` - The character is already a favorite
#[utoipa::path(
    post,
    path = "/favorite/character/{user_id}/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 409, description = "Character is already a favorite", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db, state.favorite_scope)
        .add_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite character added")),
    ))
}

/// Remove the favorite linking a user to a character.
#[utoipa::path(
    delete,
    path = "/favorite/character/{user_id}/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User or character has no favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db, state.favorite_scope)
        .remove_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite character deleted")),
    ))
}
