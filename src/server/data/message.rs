use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    chat::{Message, SendMessageParams},
    pagination::{Page, PageParams},
};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SendMessageParams) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            discussion_id: ActiveValue::Set(params.discussion_id),
            sender_username: ActiveValue::Set(params.sender_username),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets a page of a discussion's messages, oldest first.
    ///
    /// # Returns
    /// - `Ok(Page<Message>)` - Requested page with the discussion's total message count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_discussion_paginated(
        &self,
        discussion_id: i32,
        page: PageParams,
    ) -> Result<Page<Message>, DbErr> {
        let paginator = entity::prelude::Message::find()
            .filter(entity::message::Column::DiscussionId.eq(discussion_id))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let messages = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect();

        Ok(Page::new(messages, total, page))
    }
}
