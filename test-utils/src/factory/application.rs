//! Application factory for creating test application entities.

use crate::factory::helpers::{next_id, timestamp};
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications.
///
/// The referenced announcement must already exist.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    announcement_id: i32,
    guardian_username: String,
    status: ApplicationStatus,
}

impl<'a> ApplicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, announcement_id: i32) -> Self {
        Self {
            db,
            announcement_id,
            guardian_username: format!("guardian{}", next_id()),
            status: ApplicationStatus::Sent,
        }
    }

    pub fn guardian(mut self, guardian_username: impl Into<String>) -> Self {
        self.guardian_username = guardian_username.into();
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        let created_at = timestamp(next_id() as i64);
        entity::application::ActiveModel {
            announcement_id: ActiveValue::Set(self.announcement_id),
            guardian_username: ActiveValue::Set(self.guardian_username),
            message: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Sent` application from `guardian_username` to the given announcement.
pub async fn create_application(
    db: &DatabaseConnection,
    announcement_id: i32,
    guardian_username: &str,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, announcement_id)
        .guardian(guardian_username)
        .build()
        .await
}
