use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteRepository, planet::PlanetRepository},
    error::AppError,
    model::{
        favorite::FavoriteFilter,
        planet::{CreatePlanetParam, Planet, UpdatePlanetParam},
    },
    util::validate::{require_non_blank, require_non_blank_if_present},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    /// Creates a planet unless one with the same name exists
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        require_non_blank("name", &param.name)?;

        let repo = PlanetRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict("Planet already exists".to_string()));
        }

        let planet = repo.create(param).await?;
        tracing::info!("Created planet {}", planet.id);

        Ok(planet)
    }

    /// Applies a partial update to a planet
    ///
    /// Renaming onto the name of another planet is a conflict.
    pub async fn update(&self, id: i32, param: UpdatePlanetParam) -> Result<Planet, AppError> {
        require_non_blank_if_present("name", param.name.as_deref())?;

        let repo = PlanetRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        if let Some(name) = param.name.as_deref() {
            if repo.find_by_name(name).await?.is_some_and(|other| other.id != id) {
                return Err(AppError::Conflict("Planet already exists".to_string()));
            }
        }

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a planet together with every favorite referencing it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = PlanetRepository::new(&txn);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        let removed = FavoriteRepository::new(&txn)
            .delete_matching(FavoriteFilter::default().planet(id))
            .await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted planet {} and {} favorite(s)", id, removed);

        Ok(())
    }
}
