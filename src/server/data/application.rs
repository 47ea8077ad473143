//! Application data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::application::{Application, CreateApplicationParams};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new application in the `Sent` status.
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, DbErr> {
        let now = Utc::now();
        let entity = entity::application::ActiveModel {
            announcement_id: ActiveValue::Set(params.announcement_id),
            guardian_username: ActiveValue::Set(params.guardian_username),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(ApplicationStatus::Sent),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        let entity = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Application::from_entity))
    }

    /// Checks whether the guardian already applied to the announcement.
    pub async fn exists_for_guardian(
        &self,
        announcement_id: i32,
        guardian_username: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Application::find()
            .filter(entity::application::Column::AnnouncementId.eq(announcement_id))
            .filter(entity::application::Column::GuardianUsername.eq(guardian_username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets an announcement's applications in the order they arrived.
    pub async fn get_by_announcement(&self, announcement_id: i32) -> Result<Vec<Application>, DbErr> {
        let entities = entity::prelude::Application::find()
            .filter(entity::application::Column::AnnouncementId.eq(announcement_id))
            .order_by_asc(entity::application::Column::CreatedAt)
            .order_by_asc(entity::application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Gets a guardian's applications, newest first.
    pub async fn get_by_guardian(&self, guardian_username: &str) -> Result<Vec<Application>, DbErr> {
        let entities = entity::prelude::Application::find()
            .filter(entity::application::Column::GuardianUsername.eq(guardian_username))
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Sets the status of an application and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(DbErr::RecordNotFound)` - No application with that id
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Application, DbErr> {
        let existing = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Application with id {} not found",
                id
            )))?;

        let mut active: entity::application::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Application::from_entity(entity))
    }

    pub async fn count_by_announcement_and_status(
        &self,
        announcement_id: i32,
        status: ApplicationStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::AnnouncementId.eq(announcement_id))
            .filter(entity::application::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
