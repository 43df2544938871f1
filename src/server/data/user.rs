//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, partial updates, natural key lookups and deletion with
//! conversion from entity models to domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - User creation parameters
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with generated ID
    /// - `Err(DbErr)` - Database error during insert, including unique constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            last_name: ActiveValue::Set(param.last_name),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Updates the fields present in `param`, leaving the others untouched.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `param` - Partial update parameters
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(username) = param.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password) = param.password {
            active_model.password = ActiveValue::Set(password);
        }

        // Nothing to write for an empty update.
        if !active_model.is_changed() {
            return Ok(User::from_entity(user));
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by ID.
    ///
    /// Favorites referencing the user are removed by the `ON DELETE CASCADE` foreign key;
    /// `UserService::delete` also removes them explicitly inside the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user had this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
