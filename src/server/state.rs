//! Application state shared across all request handlers.
//!
//! Holds the database connection pool and the favorite uniqueness scope. The state is
//! initialized once during startup and then cloned for each request handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::model::favorite::FavoriteScope;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool (clones
/// share the pool) and `FavoriteScope` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Scope used by favorite uniqueness checks.
    pub favorite_scope: FavoriteScope,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `favorite_scope` - Scope used by favorite uniqueness checks
    pub fn new(db: DatabaseConnection, favorite_scope: FavoriteScope) -> Self {
        Self { db, favorite_scope }
    }
}
