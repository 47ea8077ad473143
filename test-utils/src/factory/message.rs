//! Message factory for creating test chat messages.

use crate::factory::helpers::{next_id, timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a message in an existing discussion.
///
/// Messages get strictly increasing `created_at` values in creation order.
pub async fn create_message(
    db: &DatabaseConnection,
    discussion_id: i32,
    sender_username: &str,
    content: &str,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        discussion_id: ActiveValue::Set(discussion_id),
        sender_username: ActiveValue::Set(sender_username.to_string()),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(timestamp(next_id() as i64)),
        ..Default::default()
    }
    .insert(db)
    .await
}
