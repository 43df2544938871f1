//! Planet domain model and parameters.

use crate::model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    /// Natural key checked on create.
    pub name: String,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
}

impl From<CreatePlanetDto> for CreatePlanetParam {
    fn from(dto: CreatePlanetDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlanetParam {
    pub name: Option<String>,
}

impl From<UpdatePlanetDto> for UpdatePlanetParam {
    fn from(dto: UpdatePlanetDto) -> Self {
        Self { name: dto.name }
    }
}
