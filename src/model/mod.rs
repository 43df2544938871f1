//! Wire DTOs shared by the HTTP controllers and the OpenAPI document.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
