//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user profiles. Profiles are
//! keyed by username, which the gateway authenticates, so there is no surrogate id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{UpsertUserParams, User};

/// Repository providing database operations for user profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The created profile
    /// - `Err(DbErr)` - Insert failed, including a primary key collision
    pub async fn create(&self, params: UpsertUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            city: ActiveValue::Set(params.city),
            bio: ActiveValue::Set(params.bio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a profile by username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Profile found
    /// - `Ok(None)` - No profile with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(username.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces every editable field of an existing profile.
    ///
    /// `created_at` is kept and `updated_at` is set to now.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(DbErr::RecordNotFound)` - No profile with that username
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpsertUserParams) -> Result<User, DbErr> {
        let existing = entity::prelude::User::find_by_id(params.username.clone())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User {} not found",
                params.username
            )))?;

        let mut active: entity::user::ActiveModel = existing.into();
        active.email = ActiveValue::Set(params.email);
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.city = ActiveValue::Set(params.city);
        active.bio = ActiveValue::Set(params.bio);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a profile.
    ///
    /// # Returns
    /// - `Ok(true)` - The profile existed and was removed
    /// - `Ok(false)` - Nothing to delete
    pub async fn delete(&self, username: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(username.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
