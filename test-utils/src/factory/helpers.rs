//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique default values and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a favorite referencing a freshly created user, planet and character.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, planet, character, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::character::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let favorite =
        crate::factory::favorite::create_favorite_with(db, user.id, planet.id, character.id)
            .await?;

    Ok((user, planet, character, favorite))
}
