use sea_orm::DatabaseConnection;

use crate::server::{
    data::{announcement::AnnouncementRepository, favorite::FavoriteRepository},
    error::AppError,
    model::favorite::Favorite,
    service::announcement::announcement_not_found,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bookmarks an announcement for a user.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The new bookmark
    /// - `Err(AppError::NotFound)` - Unknown announcement
    /// - `Err(AppError::Conflict)` - Already bookmarked
    pub async fn add(&self, username: &str, announcement_id: i32) -> Result<Favorite, AppError> {
        if AnnouncementRepository::new(self.db)
            .owner_of(announcement_id)
            .await?
            .is_none()
        {
            return Err(announcement_not_found(announcement_id));
        }

        let repo = FavoriteRepository::new(self.db);
        if repo.exists(username, announcement_id).await? {
            return Err(AppError::Conflict(
                "Announcement is already in your favorites".to_string(),
            ));
        }

        Ok(repo.create(username, announcement_id).await?)
    }

    pub async fn get_by_user(&self, username: &str) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db).get_by_user(username).await?)
    }

    pub async fn is_favorite(&self, username: &str, announcement_id: i32) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .exists(username, announcement_id)
            .await?)
    }

    pub async fn remove(&self, username: &str, announcement_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete_by_user_and_announcement(username, announcement_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(format!(
                "Announcement {} is not in your favorites",
                announcement_id
            )));
        }

        Ok(())
    }
}
