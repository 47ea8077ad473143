//! Rating (avis) domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::rating::{CreateRatingDto, PaginatedRatingsDto, RatingDto, RatingSummaryDto},
    server::{
        error::AppError,
        model::{pagination::Page, user::{optional_text, required_text}},
    },
};

/// Inclusive bounds of a note.
pub const MIN_NOTE: i32 = 1;
pub const MAX_NOTE: i32 = 5;

/// A note left by one user about another.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub author_username: String,
    pub recipient_username: String,
    pub note: i32,
    pub commentaire: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            author_username: self.author_username,
            recipient_username: self.recipient_username,
            note: self.note,
            commentaire: self.commentaire,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::avis::Model) -> Self {
        Self {
            id: entity.id,
            author_username: entity.author_username,
            recipient_username: entity.recipient_username,
            note: entity.note,
            commentaire: entity.commentaire,
            created_at: entity.created_at,
        }
    }
}

impl Page<Rating> {
    pub fn into_dto(self) -> PaginatedRatingsDto {
        let total_pages = self.total_pages();
        PaginatedRatingsDto {
            ratings: self.items.into_iter().map(|r| r.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Aggregate of every note a user received.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub recipient_username: String,
    /// `None` when the user has no ratings.
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    pub fn into_dto(self) -> RatingSummaryDto {
        RatingSummaryDto {
            recipient_username: self.recipient_username,
            average: self.average,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRatingParams {
    pub author_username: String,
    pub recipient_username: String,
    pub note: i32,
    pub commentaire: Option<String>,
}

impl CreateRatingParams {
    /// # Returns
    /// - `Ok(CreateRatingParams)` - Note within 1..=5 and a recipient is named
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn from_dto(author_username: String, dto: CreateRatingDto) -> Result<Self, AppError> {
        if !(MIN_NOTE..=MAX_NOTE).contains(&dto.note) {
            return Err(AppError::validation(
                "note",
                format!("note must be between {} and {}", MIN_NOTE, MAX_NOTE),
            ));
        }

        Ok(Self {
            author_username,
            recipient_username: required_text("recipient_username", dto.recipient_username)?,
            note: dto.note,
            commentaire: optional_text(dto.commentaire),
        })
    }
}
