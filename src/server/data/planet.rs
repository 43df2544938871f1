//! Planet data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::planet::{CreatePlanetParam, Planet, UpdatePlanetParam};

/// Repository providing database operations for planet management.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new planet.
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Gets all planets ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Finds a planet by its name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Updates the fields present in `param`.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The updated planet
    /// - `Err(DbErr::RecordNotFound)` - No planet exists with the specified ID
    pub async fn update(&self, id: i32, param: UpdatePlanetParam) -> Result<Planet, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Planet with id {} not found", id)))?;

        let Some(name) = param.name else {
            return Ok(Planet::from_entity(planet));
        };

        let mut active_model: entity::planet::ActiveModel = planet.into();
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(Planet::from_entity(entity))
    }

    /// Deletes a planet by ID, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Planet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
