use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A favorite row. Absent references serialize as `null`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FavoriteDto {
    pub id: i32,
    pub id_user: i32,
    pub id_planets: Option<i32>,
    pub id_characters: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AddFavoriteDto {
    pub id_user: i32,
    #[serde(default)]
    pub id_planets: Option<i32>,
    #[serde(default)]
    pub id_characters: Option<i32>,
}
