//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!
//!     // Create a favorite together with everything it references
//!     let (user, planet, character, favorite) =
//!         factory::helpers::create_favorite_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("a@x.com")
//!     .build()
//!     .await?;
//!
//! let favorite = factory::favorite::FavoriteFactory::new(&db, user.id)
//!     .planet_id(planet.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `character` - Create character entities
//! - `favorite` - Create favorite entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use favorite::{create_favorite, create_favorite_with};
pub use planet::create_planet;
pub use user::create_user;
