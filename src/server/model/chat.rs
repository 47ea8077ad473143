//! Discussion and message domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::chat::{DiscussionDto, MessageDto, PaginatedMessagesDto, SendMessageDto},
    server::{error::AppError, model::pagination::Page},
};

/// Longest message body accepted, counted in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// A conversation between two users, optionally about one announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct Discussion {
    pub id: i32,
    pub announcement_id: Option<i32>,
    pub sender_username: String,
    pub recipient_username: String,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a message is posted.
    pub updated_at: DateTime<Utc>,
}

impl Discussion {
    pub fn into_dto(self) -> DiscussionDto {
        DiscussionDto {
            id: self.id,
            announcement_id: self.announcement_id,
            sender_username: self.sender_username,
            recipient_username: self.recipient_username,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::discussion::Model) -> Self {
        Self {
            id: entity.id,
            announcement_id: entity.announcement_id,
            sender_username: entity.sender_username,
            recipient_username: entity.recipient_username,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_participant(&self, username: &str) -> bool {
        self.sender_username == username || self.recipient_username == username
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub discussion_id: i32,
    pub sender_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            discussion_id: self.discussion_id,
            sender_username: self.sender_username,
            content: self.content,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            discussion_id: entity.discussion_id,
            sender_username: entity.sender_username,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

impl Page<Message> {
    pub fn into_dto(self) -> PaginatedMessagesDto {
        let total_pages = self.total_pages();
        PaginatedMessagesDto {
            messages: self.items.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Parameters for finding or opening a discussion.
#[derive(Debug, Clone)]
pub struct OpenDiscussionParams {
    pub sender_username: String,
    pub recipient_username: String,
    pub announcement_id: Option<i32>,
}

/// Parameters for posting a message into a discussion.
#[derive(Debug, Clone)]
pub struct SendMessageParams {
    pub discussion_id: i32,
    pub sender_username: String,
    pub content: String,
}

impl SendMessageParams {
    /// # Returns
    /// - `Ok(SendMessageParams)` - Content is non-blank and at most 2000 characters
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn from_dto(
        discussion_id: i32,
        sender_username: String,
        dto: SendMessageDto,
    ) -> Result<Self, AppError> {
        if dto.content.trim().is_empty() {
            return Err(AppError::validation("content", "content must not be empty"));
        }

        if dto.content.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::validation(
                "content",
                format!("content must be at most {} characters", MAX_MESSAGE_LENGTH),
            ));
        }

        Ok(Self {
            discussion_id,
            sender_username,
            content: dto.content,
        })
    }
}
