use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public user representation. The password is never serialized.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "userName")]
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    #[serde(rename = "lastname", alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "userName")]
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial user update; only fields present in the body are applied.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "lastname", alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
