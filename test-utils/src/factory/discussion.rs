//! Discussion factory for creating test discussion entities.

use crate::factory::helpers::{next_id, timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test discussions between two users.
pub struct DiscussionFactory<'a> {
    db: &'a DatabaseConnection,
    sender_username: String,
    recipient_username: String,
    announcement_id: Option<i32>,
    updated_offset: Option<i64>,
}

impl<'a> DiscussionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, sender: &str, recipient: &str) -> Self {
        Self {
            db,
            sender_username: sender.to_string(),
            recipient_username: recipient.to_string(),
            announcement_id: None,
            updated_offset: None,
        }
    }

    pub fn announcement(mut self, announcement_id: i32) -> Self {
        self.announcement_id = Some(announcement_id);
        self
    }

    /// Overrides `updated_at` with the given offset (seconds) from the factory base time.
    pub fn updated_at_offset(mut self, offset_secs: i64) -> Self {
        self.updated_offset = Some(offset_secs);
        self
    }

    pub async fn build(self) -> Result<entity::discussion::Model, DbErr> {
        let created_at = timestamp(next_id() as i64);
        let updated_at = self.updated_offset.map(timestamp).unwrap_or(created_at);
        entity::discussion::ActiveModel {
            announcement_id: ActiveValue::Set(self.announcement_id),
            sender_username: ActiveValue::Set(self.sender_username),
            recipient_username: ActiveValue::Set(self.recipient_username),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a discussion from `sender` to `recipient` not tied to any announcement.
pub async fn create_discussion(
    db: &DatabaseConnection,
    sender: &str,
    recipient: &str,
) -> Result<entity::discussion::Model, DbErr> {
    DiscussionFactory::new(db, sender, recipient).build().await
}
