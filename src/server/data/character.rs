//! Character data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::character::{Character, CreateCharacterParam, UpdateCharacterParam};

/// Repository providing database operations for character management.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new character.
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            last_name: ActiveValue::Set(param.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Gets all characters ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Finds a character by its name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Updates the fields present in `param`.
    ///
    /// # Returns
    /// - `Ok(Character)` - The updated character
    /// - `Err(DbErr::RecordNotFound)` - No character exists with the specified ID
    pub async fn update(&self, id: i32, param: UpdateCharacterParam) -> Result<Character, DbErr> {
        let character = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Character with id {} not found",
                id
            )))?;

        let mut active_model: entity::character::ActiveModel = character.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }

        if !active_model.is_changed() {
            return Ok(Character::from_entity(character));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Character::from_entity(entity))
    }

    /// Deletes a character by ID, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
