//! Application domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;

use crate::{
    model::application::{ApplicationDto, CreateApplicationDto, UpdateApplicationStatusDto},
    server::{error::AppError, model::user::optional_text},
};

/// A guardian's application to look after an announcement's pets.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub announcement_id: i32,
    pub guardian_username: String,
    pub message: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            announcement_id: self.announcement_id,
            guardian_username: self.guardian_username,
            message: self.message,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::application::Model) -> Self {
        Self {
            id: entity.id,
            announcement_id: entity.announcement_id,
            guardian_username: entity.guardian_username,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub announcement_id: i32,
    pub guardian_username: String,
    pub message: Option<String>,
}

impl CreateApplicationParams {
    pub fn from_dto(guardian_username: String, dto: CreateApplicationDto) -> Self {
        Self {
            announcement_id: dto.announcement_id,
            guardian_username,
            message: optional_text(dto.message),
        }
    }
}

/// The owner's verdict on an application. `Sent` is the initial state and cannot be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationDecision(ApplicationStatus);

impl ApplicationDecision {
    /// # Returns
    /// - `Ok(ApplicationDecision)` - `Accepted` or `Refused`
    /// - `Err(AppError::Validation)` - Unknown label, or `Sent`
    pub fn from_dto(dto: UpdateApplicationStatusDto) -> Result<Self, AppError> {
        let status = dto
            .status
            .parse::<ApplicationStatus>()
            .map_err(|e| AppError::validation("status", e.to_string()))?;

        match status {
            ApplicationStatus::Accepted | ApplicationStatus::Refused => Ok(Self(status)),
            ApplicationStatus::Sent => Err(AppError::validation(
                "status",
                "status must be Accepted or Refused",
            )),
        }
    }

    pub fn status(&self) -> ApplicationStatus {
        self.0
    }
}
