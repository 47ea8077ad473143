//! Announcement data repository.
//!
//! Listings are ordered newest first with the id as tiebreaker so pages stay
//! stable when several announcements share a timestamp.

use chrono::Utc;
use entity::sea_orm_active_enums::AnnouncementStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    announcement::{
        Announcement, CreateAnnouncementParams, GetAnnouncementsParams, PaginatedAnnouncements,
        UpdateAnnouncementParams,
    },
    pagination::Page,
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new announcement in the `Open` status.
    pub async fn create(&self, params: CreateAnnouncementParams) -> Result<Announcement, DbErr> {
        let now = Utc::now();
        let fields = params.fields;
        let entity = entity::announcement::ActiveModel {
            owner_username: ActiveValue::Set(params.owner_username),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            city: ActiveValue::Set(fields.city),
            start_date: ActiveValue::Set(fields.start_date),
            end_date: ActiveValue::Set(fields.end_date),
            remuneration: ActiveValue::Set(fields.remuneration),
            status: ActiveValue::Set(AnnouncementStatus::Open),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let entity = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Announcement::from_entity))
    }

    /// Gets a page of announcements, optionally restricted to one city.
    ///
    /// # Returns
    /// - `Ok(PaginatedAnnouncements)` - Requested page, newest first, with the total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        params: GetAnnouncementsParams,
    ) -> Result<PaginatedAnnouncements, DbErr> {
        let mut query = entity::prelude::Announcement::find();
        if let Some(city) = params.city {
            query = query.filter(entity::announcement::Column::City.eq(city));
        }

        let paginator = query
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .paginate(self.db, params.page.per_page);

        let total = paginator.num_items().await?;
        let announcements = paginator
            .fetch_page(params.page.page)
            .await?
            .into_iter()
            .map(Announcement::from_entity)
            .collect();

        Ok(Page::new(announcements, total, params.page))
    }

    /// Gets every announcement published by `owner_username`, newest first.
    pub async fn get_by_owner(&self, owner_username: &str) -> Result<Vec<Announcement>, DbErr> {
        let entities = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::OwnerUsername.eq(owner_username))
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Announcement::from_entity).collect())
    }

    /// Looks up only the owner of an announcement, used by ownership checks in other services.
    pub async fn owner_of(&self, id: i32) -> Result<Option<String>, DbErr> {
        entity::prelude::Announcement::find_by_id(id)
            .select_only()
            .column(entity::announcement::Column::OwnerUsername)
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    /// Replaces every editable field of an announcement, including its status.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The updated announcement
    /// - `Err(DbErr::RecordNotFound)` - No announcement with that id
    pub async fn update(&self, params: UpdateAnnouncementParams) -> Result<Announcement, DbErr> {
        let existing = entity::prelude::Announcement::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Announcement with id {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active: entity::announcement::ActiveModel = existing.into();
        active.title = ActiveValue::Set(fields.title);
        active.description = ActiveValue::Set(fields.description);
        active.city = ActiveValue::Set(fields.city);
        active.start_date = ActiveValue::Set(fields.start_date);
        active.end_date = ActiveValue::Set(fields.end_date);
        active.remuneration = ActiveValue::Set(fields.remuneration);
        active.status = ActiveValue::Set(params.status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Announcement::from_entity(entity))
    }

    /// Deletes an announcement. Its applications and favorites go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
