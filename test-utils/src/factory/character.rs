//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    last_name: String,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - last_name: `"Skywalker"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Character {}", next_id()),
            last_name: "Skywalker".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(self.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
