//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::{next_id, timestamp};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::AnnouncementStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
///
/// Each built announcement gets a `created_at` one second later than the previous one
/// built by any factory, so listing order in tests follows creation order.
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    owner_username: String,
    title: String,
    city: String,
    status: AnnouncementStatus,
    remuneration: Option<i32>,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - owner_username: `"owner"`
    /// - title: `"Announcement {id}"`
    /// - city: `"Paris"`
    /// - status: `Open`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            owner_username: "owner".to_string(),
            title: format!("Announcement {}", next_id()),
            city: "Paris".to_string(),
            status: AnnouncementStatus::Open,
            remuneration: None,
        }
    }

    pub fn owner(mut self, owner_username: impl Into<String>) -> Self {
        self.owner_username = owner_username.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn status(mut self, status: AnnouncementStatus) -> Self {
        self.status = status;
        self
    }

    pub fn remuneration(mut self, remuneration: i32) -> Self {
        self.remuneration = Some(remuneration);
        self
    }

    /// Builds and inserts the announcement entity into the database.
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        let created_at = timestamp(next_id() as i64);
        entity::announcement::ActiveModel {
            owner_username: ActiveValue::Set(self.owner_username),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Looking after two cats".to_string()),
            city: ActiveValue::Set(self.city),
            start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap_or_default()),
            end_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 7, 14).unwrap_or_default()),
            remuneration: ActiveValue::Set(self.remuneration),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open announcement owned by `owner_username`.
pub async fn create_announcement(
    db: &DatabaseConnection,
    owner_username: &str,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).owner(owner_username).build().await
}
