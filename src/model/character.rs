use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateCharacterDto {
    pub name: String,
    #[serde(rename = "lastName", alias = "lastname")]
    pub last_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateCharacterDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "lastName", alias = "lastname")]
    pub last_name: Option<String>,
}
