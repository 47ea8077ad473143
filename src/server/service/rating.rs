//! Rating service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::rating::RatingRepository,
    error::AppError,
    middleware::identity::AuthenticatedUser,
    model::{
        pagination::{Page, PageParams},
        rating::{CreateRatingParams, Rating, RatingSummary},
    },
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the caller's rating of another user.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The stored rating
    /// - `Err(AppError::BadRequest)` - The caller rated themself
    /// - `Err(AppError::Conflict)` - The caller already rated this user
    pub async fn create(&self, params: CreateRatingParams) -> Result<Rating, AppError> {
        if params.author_username == params.recipient_username {
            return Err(AppError::BadRequest("You cannot rate yourself".to_string()));
        }

        let repo = RatingRepository::new(self.db);
        if repo
            .exists(&params.author_username, &params.recipient_username)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "You already rated {}",
                params.recipient_username
            )));
        }

        let rating = repo.create(params).await?;
        tracing::info!(
            username = %rating.author_username,
            recipient = %rating.recipient_username,
            "Rating recorded"
        );

        Ok(rating)
    }

    pub async fn get_by_recipient(
        &self,
        recipient_username: &str,
        page: PageParams,
    ) -> Result<Page<Rating>, AppError> {
        Ok(RatingRepository::new(self.db)
            .get_by_recipient_paginated(recipient_username, page)
            .await?)
    }

    pub async fn summary(&self, recipient_username: &str) -> Result<RatingSummary, AppError> {
        Ok(RatingRepository::new(self.db)
            .summary_for_recipient(recipient_username)
            .await?)
    }

    /// Deletes a rating on behalf of its author.
    pub async fn delete(&self, caller: &AuthenticatedUser, id: i32) -> Result<(), AppError> {
        let repo = RatingRepository::new(self.db);
        let rating = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rating with id {} not found", id)))?;
        caller.require_owner(&rating.author_username, "delete rating")?;

        repo.delete(id).await?;

        Ok(())
    }
}
