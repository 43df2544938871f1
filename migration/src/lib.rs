pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_planets_table;
mod m20260101_000003_create_characters_table;
mod m20260102_000004_create_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_planets_table::Migration),
            Box::new(m20260101_000003_create_characters_table::Migration),
            Box::new(m20260102_000004_create_favorites_table::Migration),
        ]
    }
}
