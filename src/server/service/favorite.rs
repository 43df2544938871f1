//! Favorite management: linking users to planets and characters.
//!
//! All existence checks run against the user, planet and character tables before any
//! favorite row is written. Uniqueness of a favorite is enforced here rather than by the
//! schema, using the configured `FavoriteScope`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::favorite::{
        AddFavoriteParam, CreateFavoriteParam, Favorite, FavoriteAction, FavoriteFilter,
        FavoriteOutcome, FavoriteScope, FavoriteSlot,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
    scope: FavoriteScope,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection, scope: FavoriteScope) -> Self {
        Self { db, scope }
    }

    /// Adds a favorite for a user with an optional planet and character
    ///
    /// Every supplied reference must exist. When the user already has favorites, the
    /// request is evaluated with `FavoriteAction::decide`: a planet that is already held is
    /// a conflict, a character that is already held gets the requested planet attached to
    /// its row, anything else creates a new row.
    ///
    /// # Returns
    /// - `Ok(FavoriteOutcome::Created)` - A new favorite row was inserted
    /// - `Ok(FavoriteOutcome::Updated)` - The row holding the character now holds the planet
    /// - `Err(AppError::NotFound)` - User, planet or character does not exist
    /// - `Err(AppError::Conflict)` - The favorite already exists
    pub async fn add(&self, param: AddFavoriteParam) -> Result<FavoriteOutcome, AppError> {
        self.require_user(param.user_id).await?;
        if let Some(planet_id) = param.planet_id {
            self.require_planet(planet_id).await?;
        }
        if let Some(character_id) = param.character_id {
            self.require_character(character_id).await?;
        }

        let repo = FavoriteRepository::new(self.db);

        let user_has_favorites = repo
            .exists(FavoriteFilter::default().user(param.user_id))
            .await?;

        let scoped = self.scope.filter_for(param.user_id);
        let planet_holder = match param.planet_id {
            Some(planet_id) => repo.find_first(scoped.planet(planet_id)).await?,
            None => None,
        };
        let character_holder = match param.character_id {
            Some(character_id) => repo.find_first(scoped.character(character_id)).await?,
            None => None,
        };

        let action = FavoriteAction::decide(
            user_has_favorites,
            FavoriteSlot::resolve(param.planet_id, planet_holder.as_ref()),
            FavoriteSlot::resolve(param.character_id, character_holder.as_ref()),
        );

        match action {
            FavoriteAction::Create => {
                let favorite = repo.create(CreateFavoriteParam::from(param)).await?;
                tracing::debug!("Created favorite {} for user {}", favorite.id, favorite.user_id);

                Ok(FavoriteOutcome::Created(favorite))
            }
            FavoriteAction::AttachPlanet {
                favorite_id,
                planet_id,
            } => {
                let favorite = repo.set_planet(favorite_id, planet_id).await?;
                tracing::debug!("Attached planet {} to favorite {}", planet_id, favorite_id);

                Ok(FavoriteOutcome::Updated(favorite))
            }
            FavoriteAction::Reject => Err(AppError::Conflict(
                "Favorite already exists".to_string(),
            )),
        }
    }

    /// Adds a planet-only favorite for a user that already has at least one favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The inserted favorite
    /// - `Err(AppError::NotFound)` - The user has no favorites yet, or the planet does not exist
    /// - `Err(AppError::Conflict)` - A favorite in scope already holds the planet
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.exists(FavoriteFilter::default().user(user_id)).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if repo
            .exists(self.scope.filter_for(user_id).planet(planet_id))
            .await?
        {
            return Err(AppError::Conflict(
                "Planet is already a favorite".to_string(),
            ));
        }

        self.require_planet(planet_id).await?;

        let favorite = repo
            .create(CreateFavoriteParam {
                user_id,
                planet_id: Some(planet_id),
                character_id: None,
            })
            .await?;

        Ok(favorite)
    }

    /// Adds a character-only favorite for a user that already has at least one favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The inserted favorite
    /// - `Err(AppError::NotFound)` - The user has no favorites yet, or the character does not exist
    /// - `Err(AppError::Conflict)` - A favorite in scope already holds the character
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.exists(FavoriteFilter::default().user(user_id)).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if repo
            .exists(self.scope.filter_for(user_id).character(character_id))
            .await?
        {
            return Err(AppError::Conflict(
                "Character is already a favorite".to_string(),
            ));
        }

        self.require_character(character_id).await?;

        let favorite = repo
            .create(CreateFavoriteParam {
                user_id,
                planet_id: None,
                character_id: Some(character_id),
            })
            .await?;

        Ok(favorite)
    }

    /// Deletes a favorite by ID
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let deleted = FavoriteRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }

    /// Deletes the first favorite linking the user to the planet
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The deleted favorite
    /// - `Err(AppError::NotFound)` - No favorite references the user, or none references the planet
    /// - `Err(AppError::InternalError)` - Both are referenced, but never by the same row
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.exists(FavoriteFilter::default().user(user_id)).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if !repo.exists(FavoriteFilter::default().planet(planet_id)).await? {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        let favorite = repo
            .find_first(FavoriteFilter::default().user(user_id).planet(planet_id))
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "No favorite links user {} to planet {}",
                    user_id, planet_id
                ))
            })?;

        repo.delete(favorite.id).await?;

        Ok(favorite)
    }

    /// Deletes the first favorite linking the user to the character
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The deleted favorite
    /// - `Err(AppError::NotFound)` - No favorite references the user, or none references the character
    /// - `Err(AppError::InternalError)` - Both are referenced, but never by the same row
    pub async fn remove_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.exists(FavoriteFilter::default().user(user_id)).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if !repo
            .exists(FavoriteFilter::default().character(character_id))
            .await?
        {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        let favorite = repo
            .find_first(
                FavoriteFilter::default()
                    .user(user_id)
                    .character(character_id),
            )
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "No favorite links user {} to character {}",
                    user_id, character_id
                ))
            })?;

        repo.delete(favorite.id).await?;

        Ok(favorite)
    }

    /// Gets every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db).get_all().await?)
    }

    /// Gets a favorite by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Favorite, AppError> {
        FavoriteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))
    }

    /// Gets the favorites of an existing user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        self.require_user(user_id).await?;

        Ok(FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?)
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn require_planet(&self, planet_id: i32) -> Result<(), AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(planet_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    async fn require_character(&self, character_id: i32) -> Result<(), AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }
}
