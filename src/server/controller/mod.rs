//! HTTP request handlers.
//!
//! Each handler extracts path and JSON input, converts DTOs into service parameters,
//! calls the matching service and converts the resulting domain model back into a DTO.
//! Every handler carries a `utoipa::path` annotation collected by the router into the
//! OpenAPI document served at `/docs`.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
