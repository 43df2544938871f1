use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{character, favorite, planet, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Holonet", description = "Users, planets, characters and their favorites"),
    tags(
        (name = "user", description = "User management"),
        (name = "planet", description = "Planet management"),
        (name = "character", description = "Character management"),
        (name = "favorite", description = "Favorites linking users to planets and characters")
    )
)]
struct ApiDoc;

/// Builds the API router and the Swagger UI serving its OpenAPI document at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(user::get_user_favorites))
        .routes(routes!(planet::get_planets, planet::create_planet))
        .routes(routes!(
            planet::get_planet,
            planet::update_planet,
            planet::delete_planet
        ))
        .routes(routes!(
            character::get_characters,
            character::create_character
        ))
        .routes(routes!(
            character::get_character,
            character::update_character,
            character::delete_character
        ))
        .routes(routes!(favorite::get_favorites))
        .routes(routes!(favorite::get_favorite))
        .routes(routes!(favorite::add_favorite))
        .routes(routes!(favorite::delete_favorite))
        .routes(routes!(
            favorite::add_favorite_planet,
            favorite::delete_favorite_planet
        ))
        .routes(routes!(
            favorite::add_favorite_character,
            favorite::delete_favorite_character
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
