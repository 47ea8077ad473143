//! Announcement service for business logic.
//!
//! Anyone may read announcements. Only the owner may replace or delete one.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    middleware::identity::AuthenticatedUser,
    model::announcement::{
        Announcement, CreateAnnouncementParams, GetAnnouncementsParams, PaginatedAnnouncements,
        UpdateAnnouncementParams,
    },
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAnnouncementParams) -> Result<Announcement, AppError> {
        let announcement = AnnouncementRepository::new(self.db).create(params).await?;

        tracing::info!(
            username = %announcement.owner_username,
            announcement_id = announcement.id,
            "Published announcement"
        );

        Ok(announcement)
    }

    pub async fn get_paginated(
        &self,
        params: GetAnnouncementsParams,
    ) -> Result<PaginatedAnnouncements, AppError> {
        Ok(AnnouncementRepository::new(self.db)
            .get_paginated(params)
            .await?)
    }

    pub async fn get_by_owner(&self, owner_username: &str) -> Result<Vec<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db)
            .get_by_owner(owner_username)
            .await?)
    }

    /// # Returns
    /// - `Ok(Announcement)` - Announcement found
    /// - `Err(AppError::NotFound)` - No announcement with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| announcement_not_found(id))
    }

    /// Replaces an announcement on behalf of its owner.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The updated announcement
    /// - `Err(AppError::NotFound)` - No announcement with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - The caller is not the owner
    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        params: UpdateAnnouncementParams,
    ) -> Result<Announcement, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let owner = repo
            .owner_of(params.id)
            .await?
            .ok_or_else(|| announcement_not_found(params.id))?;
        caller.require_owner(&owner, "update announcement")?;

        Ok(repo.update(params).await?)
    }

    /// Deletes an announcement on behalf of its owner.
    pub async fn delete(&self, caller: &AuthenticatedUser, id: i32) -> Result<(), AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let owner = repo
            .owner_of(id)
            .await?
            .ok_or_else(|| announcement_not_found(id))?;
        caller.require_owner(&owner, "delete announcement")?;

        repo.delete(id).await?;
        tracing::info!(username = %caller.username(), announcement_id = id, "Deleted announcement");

        Ok(())
    }
}

pub(crate) fn announcement_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Announcement with id {} not found", id))
}
