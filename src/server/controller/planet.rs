use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{error::AppError, service::planet::PlanetService, state::AppState},
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Create a planet.
///
/// # Returns
/// - `200 OK` - The created planet
/// - `400 Bad Request` - Malformed body or blank name
/// - `409 Conflict` - A planet with this name exists
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Created planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = MessageDto),
        (status = 409, description = "Planet already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let planet = PlanetService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Updated planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 409, description = "Planet already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let planet = PlanetService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet and every favorite referencing it.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PlanetService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Planet deleted"))))
}
