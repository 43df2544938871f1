use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{error::AppError, service::character::CharacterService, state::AppState},
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = MessageDto),
        (status = 409, description = "Character already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let character = CharacterService::new(&state.db)
        .create(payload.into())
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Updated character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = MessageDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 409, description = "Character already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let character = CharacterService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CharacterService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Character deleted"))))
}
