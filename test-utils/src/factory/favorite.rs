//! Favorite factory for creating test favorite entities.

use crate::factory::helpers::{next_id, timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks an existing announcement as a favorite of `username`.
pub async fn create_favorite(
    db: &DatabaseConnection,
    username: &str,
    announcement_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        announcement_id: ActiveValue::Set(announcement_id),
        created_at: ActiveValue::Set(timestamp(next_id() as i64)),
        ..Default::default()
    }
    .insert(db)
    .await
}
