//! Favorite factory for creating test favorite entities.
//!
//! The referenced user (and planet/character, when set) must already exist since the
//! favorites table enforces its foreign keys.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test favorites.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::favorite::FavoriteFactory;
///
/// let favorite = FavoriteFactory::new(&db, user.id)
///     .planet_id(planet.id)
///     .build()
///     .await?;
/// ```
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory for the given user with no planet or character.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            planet_id: None,
            character_id: None,
        }
    }

    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    pub fn character_id(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Builds and inserts the favorite entity into the database.
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            planet_id: ActiveValue::Set(self.planet_id),
            character_id: ActiveValue::Set(self.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite for the user referencing neither a planet nor a character.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id).build().await
}

/// Creates a favorite for the user referencing both a planet and a character.
pub async fn create_favorite_with(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .planet_id(planet_id)
        .character_id(character_id)
        .build()
        .await
}
