//! User domain models and parameters.
//!
//! Provides the user domain model along with the parameter types used when creating and
//! partially updating users.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// User account. The stored password stays at the repository boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    /// Unique handle of the user.
    pub username: String,
    /// Unique email, used as the natural key on create.
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            username: entity.username,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for partially updating a user.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            last_name: dto.last_name,
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}
