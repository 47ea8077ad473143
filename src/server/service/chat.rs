//! Chat service for discussions and messages.
//!
//! Only the two participants of a discussion may read or post in it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{discussion::DiscussionRepository, message::MessageRepository},
    error::{auth::AuthError, AppError},
    middleware::identity::AuthenticatedUser,
    model::{
        chat::{Discussion, Message, OpenDiscussionParams, SendMessageParams},
        pagination::{Page, PageParams},
    },
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the discussion between the caller and the recipient, or opens one.
    ///
    /// # Returns
    /// - `Ok((Discussion, true))` - A new discussion was created
    /// - `Ok((Discussion, false))` - An existing discussion was found
    /// - `Err(AppError::BadRequest)` - The caller tried to talk to themself
    pub async fn open(&self, params: OpenDiscussionParams) -> Result<(Discussion, bool), AppError> {
        if params.sender_username == params.recipient_username {
            return Err(AppError::BadRequest(
                "You cannot open a discussion with yourself".to_string(),
            ));
        }

        let repo = DiscussionRepository::new(self.db);
        if let Some(existing) = repo
            .find_between(
                &params.sender_username,
                &params.recipient_username,
                params.announcement_id,
            )
            .await?
        {
            return Ok((existing, false));
        }

        let discussion = repo.create(params).await?;
        tracing::debug!(discussion_id = discussion.id, "Opened discussion");

        Ok((discussion, true))
    }

    pub async fn get_for_user(&self, username: &str) -> Result<Vec<Discussion>, AppError> {
        Ok(DiscussionRepository::new(self.db)
            .get_for_user(username)
            .await?)
    }

    /// Gets a page of messages, oldest first, for a participant.
    pub async fn get_messages(
        &self,
        caller: &AuthenticatedUser,
        discussion_id: i32,
        page: PageParams,
    ) -> Result<Page<Message>, AppError> {
        self.participant_discussion(caller, discussion_id).await?;

        Ok(MessageRepository::new(self.db)
            .get_by_discussion_paginated(discussion_id, page)
            .await?)
    }

    /// Posts a message and marks the discussion as recently active.
    pub async fn send_message(
        &self,
        caller: &AuthenticatedUser,
        params: SendMessageParams,
    ) -> Result<Message, AppError> {
        self.participant_discussion(caller, params.discussion_id)
            .await?;

        let discussion_id = params.discussion_id;
        let message = MessageRepository::new(self.db).create(params).await?;
        DiscussionRepository::new(self.db)
            .touch(discussion_id)
            .await?;

        Ok(message)
    }

    /// Loads a discussion and checks that the caller takes part in it.
    async fn participant_discussion(
        &self,
        caller: &AuthenticatedUser,
        discussion_id: i32,
    ) -> Result<Discussion, AppError> {
        let discussion = DiscussionRepository::new(self.db)
            .find_by_id(discussion_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Discussion with id {} not found", discussion_id))
            })?;

        if !discussion.has_participant(caller.username()) {
            return Err(AuthError::AccessDenied(
                caller.username().to_string(),
                format!("not a participant of discussion {}", discussion_id),
            )
            .into());
        }

        Ok(discussion)
    }
}
