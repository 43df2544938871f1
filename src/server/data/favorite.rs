//! Favorite data repository for database operations
//!
//! Provides the `FavoriteRepository` for managing favorite rows. Besides plain CRUD it
//! offers field-filtered lookups (`find_first`, `exists`) used by the favorite service to
//! decide between inserting, updating in place and rejecting a request, and bulk deletes
//! used when a referenced user, planet or character is removed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{CreateFavoriteParam, Favorite, FavoriteFilter};

/// Repository providing database operations for favorite management.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new favorite row
    ///
    /// # Arguments
    /// - `param` - User and optional planet/character references
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite with generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            planet_id: ActiveValue::Set(param.planet_id),
            character_id: ActiveValue::Set(param.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Gets every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds a favorite by ID
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The favorite exists
    /// - `Ok(None)` - No favorite has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Gets the favorites of a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds the lowest-ID favorite matching every field set on the filter
    ///
    /// # Arguments
    /// - `filter` - Fields to match; unset fields match any value
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - First matching favorite
    /// - `Ok(None)` - No favorite matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_first(&self, filter: FavoriteFilter) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find()
            .filter(filter.condition())
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Checks whether any favorite matches the filter
    pub async fn exists(&self, filter: FavoriteFilter) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(filter.condition())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Points an existing favorite at a different planet
    ///
    /// # Arguments
    /// - `id` - ID of the favorite to modify
    /// - `planet_id` - Planet the favorite should reference
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The updated favorite
    /// - `Err(DbErr::RecordNotFound)` - No favorite exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn set_planet(&self, id: i32, planet_id: i32) -> Result<Favorite, DbErr> {
        let favorite = entity::prelude::Favorite::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Favorite with id {} not found",
                id
            )))?;

        let mut active_model: entity::favorite::ActiveModel = favorite.into();
        active_model.planet_id = ActiveValue::Set(Some(planet_id));

        let entity = active_model.update(self.db).await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Deletes a favorite by ID
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was deleted
    /// - `Ok(false)` - No favorite had this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every favorite matching the filter, returning the number of rows removed
    ///
    /// Used to cascade the removal of a user, planet or character.
    pub async fn delete_matching(&self, filter: FavoriteFilter) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(filter.condition())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
