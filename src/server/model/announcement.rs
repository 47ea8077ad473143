//! Announcement domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::AnnouncementStatus;

use crate::{
    model::announcement::{
        AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto, UpdateAnnouncementDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::{Page, PageParams},
            user::required_text,
        },
    },
};

/// A pet-sitting request published by an owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub owner_username: String,
    pub title: String,
    pub description: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Offered remuneration in whole currency units.
    pub remuneration: Option<i32>,
    pub status: AnnouncementStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            owner_username: self.owner_username,
            title: self.title,
            description: self.description,
            city: self.city,
            start_date: self.start_date,
            end_date: self.end_date,
            remuneration: self.remuneration,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            owner_username: entity.owner_username,
            title: entity.title,
            description: entity.description,
            city: entity.city,
            start_date: entity.start_date,
            end_date: entity.end_date,
            remuneration: entity.remuneration,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == AnnouncementStatus::Open
    }
}

/// Paginated announcements, newest first.
pub type PaginatedAnnouncements = Page<Announcement>;

impl Page<Announcement> {
    pub fn into_dto(self) -> PaginatedAnnouncementsDto {
        let total_pages = self.total_pages();
        PaginatedAnnouncementsDto {
            announcements: self.items.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Fields shared by creation and replacement, validated once.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementFields {
    pub title: String,
    pub description: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remuneration: Option<i32>,
}

impl AnnouncementFields {
    fn validate(
        title: String,
        description: String,
        city: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        remuneration: Option<i32>,
    ) -> Result<Self, AppError> {
        let title = required_text("title", title)?;
        let city = required_text("city", city)?;

        if start_date > end_date {
            return Err(AppError::validation(
                "end_date",
                "end_date must not be before start_date",
            ));
        }

        if remuneration.is_some_and(|r| r < 0) {
            return Err(AppError::validation(
                "remuneration",
                "remuneration must not be negative",
            ));
        }

        Ok(Self {
            title,
            description: description.trim().to_string(),
            city,
            start_date,
            end_date,
            remuneration,
        })
    }
}

/// Parameters for publishing a new announcement. New announcements are always open.
#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub owner_username: String,
    pub fields: AnnouncementFields,
}

impl CreateAnnouncementParams {
    pub fn from_dto(owner_username: String, dto: CreateAnnouncementDto) -> Result<Self, AppError> {
        Ok(Self {
            owner_username,
            fields: AnnouncementFields::validate(
                dto.title,
                dto.description,
                dto.city,
                dto.start_date,
                dto.end_date,
                dto.remuneration,
            )?,
        })
    }
}

/// Parameters for fully replacing an announcement.
#[derive(Debug, Clone)]
pub struct UpdateAnnouncementParams {
    pub id: i32,
    pub fields: AnnouncementFields,
    pub status: AnnouncementStatus,
}

impl UpdateAnnouncementParams {
    /// # Returns
    /// - `Ok(UpdateAnnouncementParams)` - Validated replacement
    /// - `Err(AppError::Validation)` - Invalid field or unknown status label
    pub fn from_dto(id: i32, dto: UpdateAnnouncementDto) -> Result<Self, AppError> {
        let status = dto
            .status
            .parse::<AnnouncementStatus>()
            .map_err(|e| AppError::validation("status", e.to_string()))?;

        Ok(Self {
            id,
            fields: AnnouncementFields::validate(
                dto.title,
                dto.description,
                dto.city,
                dto.start_date,
                dto.end_date,
                dto.remuneration,
            )?,
            status,
        })
    }
}

/// Filters applied to the public announcement listing.
#[derive(Debug, Clone)]
pub struct GetAnnouncementsParams {
    pub page: PageParams,
    pub city: Option<String>,
}
