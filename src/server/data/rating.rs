//! Rating (avis) data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};

use crate::server::model::{
    pagination::{Page, PageParams},
    rating::{CreateRatingParams, Rating, RatingSummary},
};

pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRatingParams) -> Result<Rating, DbErr> {
        let entity = entity::avis::ActiveModel {
            author_username: ActiveValue::Set(params.author_username),
            recipient_username: ActiveValue::Set(params.recipient_username),
            note: ActiveValue::Set(params.note),
            commentaire: ActiveValue::Set(params.commentaire),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rating>, DbErr> {
        let entity = entity::prelude::Avis::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rating::from_entity))
    }

    /// Checks whether `author` already rated `recipient`.
    pub async fn exists(&self, author_username: &str, recipient_username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Avis::find()
            .filter(entity::avis::Column::AuthorUsername.eq(author_username))
            .filter(entity::avis::Column::RecipientUsername.eq(recipient_username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of the ratings a user received, newest first.
    pub async fn get_by_recipient_paginated(
        &self,
        recipient_username: &str,
        page: PageParams,
    ) -> Result<Page<Rating>, DbErr> {
        let paginator = entity::prelude::Avis::find()
            .filter(entity::avis::Column::RecipientUsername.eq(recipient_username))
            .order_by_desc(entity::avis::Column::CreatedAt)
            .order_by_desc(entity::avis::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let ratings = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(Rating::from_entity)
            .collect();

        Ok(Page::new(ratings, total, page))
    }

    /// Computes the average note and rating count for a user in a single aggregate query.
    ///
    /// The average is `None` when nobody rated the user.
    pub async fn summary_for_recipient(&self, recipient_username: &str) -> Result<RatingSummary, DbErr> {
        let (count, average): (i64, Option<f64>) = entity::prelude::Avis::find()
            .select_only()
            .column_as(
                Expr::from(Func::count(Expr::col(entity::avis::Column::Id))),
                "count",
            )
            .column_as(
                Expr::from(Func::cast_as(
                    Func::avg(Expr::col(entity::avis::Column::Note)),
                    "double precision",
                )),
                "average",
            )
            .filter(entity::avis::Column::RecipientUsername.eq(recipient_username))
            .into_tuple()
            .one(self.db)
            .await?
            .unwrap_or((0, None));

        let count = u64::try_from(count).unwrap_or_default();

        Ok(RatingSummary {
            recipient_username: recipient_username.to_string(),
            average,
            count,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Avis::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
