//! Discussion data repository.
//!
//! A discussion is identified by its unordered pair of participants plus the
//! announcement it is about, so lookups match either participant order.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::chat::{Discussion, OpenDiscussionParams};

pub struct DiscussionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the discussion between two users about an announcement.
    ///
    /// `first` and `second` may each be either the sender or the recipient. A `None`
    /// announcement only matches discussions that are not tied to any announcement.
    ///
    /// # Returns
    /// - `Ok(Some(Discussion))` - Oldest matching discussion
    /// - `Ok(None)` - The pair never talked about this announcement
    pub async fn find_between(
        &self,
        first: &str,
        second: &str,
        announcement_id: Option<i32>,
    ) -> Result<Option<Discussion>, DbErr> {
        use entity::discussion::Column;

        let participants = Condition::any()
            .add(
                Condition::all()
                    .add(Column::SenderUsername.eq(first))
                    .add(Column::RecipientUsername.eq(second)),
            )
            .add(
                Condition::all()
                    .add(Column::SenderUsername.eq(second))
                    .add(Column::RecipientUsername.eq(first)),
            );

        let announcement = match announcement_id {
            Some(id) => Column::AnnouncementId.eq(id),
            None => Column::AnnouncementId.is_null(),
        };

        let entity = entity::prelude::Discussion::find()
            .filter(participants)
            .filter(announcement)
            .order_by_asc(Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Discussion::from_entity))
    }

    pub async fn create(&self, params: OpenDiscussionParams) -> Result<Discussion, DbErr> {
        let now = Utc::now();
        let entity = entity::discussion::ActiveModel {
            announcement_id: ActiveValue::Set(params.announcement_id),
            sender_username: ActiveValue::Set(params.sender_username),
            recipient_username: ActiveValue::Set(params.recipient_username),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Discussion::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Discussion>, DbErr> {
        let entity = entity::prelude::Discussion::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Discussion::from_entity))
    }

    /// Gets every discussion the user takes part in, most recently active first.
    pub async fn get_for_user(&self, username: &str) -> Result<Vec<Discussion>, DbErr> {
        use entity::discussion::Column;

        let entities = entity::prelude::Discussion::find()
            .filter(
                Condition::any()
                    .add(Column::SenderUsername.eq(username))
                    .add(Column::RecipientUsername.eq(username)),
            )
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Discussion::from_entity).collect())
    }

    /// Marks a discussion as active now.
    pub async fn touch(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Discussion::update_many()
            .col_expr(
                entity::discussion::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::discussion::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
