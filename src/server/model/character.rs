//! Character domain model and parameters.

use crate::model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    /// Natural key checked on create.
    pub name: String,
    pub last_name: String,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: String,
    pub last_name: String,
}

impl From<CreateCharacterDto> for CreateCharacterParam {
    fn from(dto: CreateCharacterDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterParam {
    pub name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateCharacterDto> for UpdateCharacterParam {
    fn from(dto: UpdateCharacterDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
        }
    }
}
