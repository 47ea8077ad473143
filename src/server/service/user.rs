//! User service for business logic.
//!
//! This module provides the `UserService` for managing profiles. Every write targets
//! the caller's own profile, so no ownership checks are needed beyond the identity
//! the gateway asserted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpsertUserParams, User},
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the caller's profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The created profile
    /// - `Err(AppError::Conflict)` - The caller already has a profile
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.exists(&params.username).await? {
            return Err(AppError::Conflict(format!(
                "A profile already exists for {}",
                params.username
            )));
        }

        let user = repo.create(params).await?;
        tracing::info!(username = %user.username, "Created user profile");

        Ok(user)
    }

    /// Retrieves a profile by username.
    ///
    /// # Returns
    /// - `Ok(User)` - Profile found
    /// - `Err(AppError::NotFound)` - No profile with that username
    pub async fn get(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
    }

    /// Replaces the caller's profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::NotFound)` - The caller has no profile yet
    pub async fn update(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(&params.username).await? {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.username
            )));
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes the caller's profile.
    ///
    /// # Returns
    /// - `Ok(())` - Profile removed
    /// - `Err(AppError::NotFound)` - The caller has no profile
    pub async fn delete(&self, username: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(username).await? {
            return Err(AppError::NotFound(format!("User {} not found", username)));
        }

        tracing::info!(username = %username, "Deleted user profile");

        Ok(())
    }
}
