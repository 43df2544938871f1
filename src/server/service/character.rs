use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, favorite::FavoriteRepository},
    error::AppError,
    model::{
        character::{Character, CreateCharacterParam, UpdateCharacterParam},
        favorite::FavoriteFilter,
    },
    util::validate::{require_non_blank, require_non_blank_if_present},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }

    /// Gets a character by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }

    /// Creates a character unless one with the same name exists
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        require_non_blank("name", &param.name)?;

        let repo = CharacterRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict("Character already exists".to_string()));
        }

        let character = repo.create(param).await?;
        tracing::info!("Created character {}", character.id);

        Ok(character)
    }

    /// Applies a partial update to a character
    ///
    /// Renaming onto the name of another character is a conflict.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCharacterParam,
    ) -> Result<Character, AppError> {
        require_non_blank_if_present("name", param.name.as_deref())?;

        let repo = CharacterRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        if let Some(name) = param.name.as_deref() {
            if repo.find_by_name(name).await?.is_some_and(|other| other.id != id) {
                return Err(AppError::Conflict("Character already exists".to_string()));
            }
        }

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a character together with every favorite referencing it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = CharacterRepository::new(&txn);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        let removed = FavoriteRepository::new(&txn)
            .delete_matching(FavoriteFilter::default().character(id))
            .await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted character {} and {} favorite(s)", id, removed);

        Ok(())
    }
}
