use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{
        favorite::FavoriteFilter,
        user::{CreateUserParam, UpdateUserParam, User},
    },
    util::validate::{require_non_blank, require_non_blank_if_present},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a user after checking its email and username are free
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - A required field is blank
    /// - `Err(AppError::Conflict)` - Email or username already registered
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        require_non_blank("name", &param.name)?;
        require_non_blank("username", &param.username)?;
        require_non_blank("email", &param.email)?;
        require_non_blank("password", &param.password)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        if repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let user = repo.create(param).await?;
        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Applies a partial update to a user
    ///
    /// Changing the email or username to one owned by another user is a conflict.
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        require_non_blank_if_present("name", param.name.as_deref())?;
        require_non_blank_if_present("username", param.username.as_deref())?;
        require_non_blank_if_present("email", param.email.as_deref())?;
        require_non_blank_if_present("password", param.password.as_deref())?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(email) = param.email.as_deref() {
            if repo.find_by_email(email).await?.is_some_and(|other| other.id != id) {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }
        if let Some(username) = param.username.as_deref() {
            if repo
                .find_by_username(username)
                .await?
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::Conflict("Username already exists".to_string()));
            }
        }

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a user together with every favorite referencing it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = UserRepository::new(&txn);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let removed = FavoriteRepository::new(&txn)
            .delete_matching(FavoriteFilter::default().user(id))
            .await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {} and {} favorite(s)", id, removed);

        Ok(())
    }
}
