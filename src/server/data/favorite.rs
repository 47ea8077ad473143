use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::Favorite;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, username: &str, announcement_id: i32) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            announcement_id: ActiveValue::Set(announcement_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    pub async fn exists(&self, username: &str, announcement_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::Username.eq(username))
            .filter(entity::favorite::Column::AnnouncementId.eq(announcement_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's favorites, most recently added first.
    pub async fn get_by_user(&self, username: &str) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::Username.eq(username))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Removes a bookmark.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one row was removed
    /// - `Ok(false)` - The user had not bookmarked the announcement
    pub async fn delete_by_user_and_announcement(
        &self,
        username: &str,
        announcement_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::Username.eq(username))
            .filter(entity::favorite::Column::AnnouncementId.eq(announcement_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
