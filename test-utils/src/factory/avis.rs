//! Rating factory for creating test `avis` entities.

use crate::factory::helpers::{next_id, timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ratings with customizable fields.
pub struct AvisFactory<'a> {
    db: &'a DatabaseConnection,
    author_username: String,
    recipient_username: String,
    note: i32,
    commentaire: Option<String>,
}

impl<'a> AvisFactory<'a> {
    /// Creates a new AvisFactory with default values.
    ///
    /// Defaults:
    /// - author_username: `"author{id}"`
    /// - recipient_username: `"recipient"`
    /// - note: `5`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            author_username: format!("author{}", next_id()),
            recipient_username: "recipient".to_string(),
            note: 5,
            commentaire: None,
        }
    }

    pub fn author(mut self, author_username: impl Into<String>) -> Self {
        self.author_username = author_username.into();
        self
    }

    pub fn recipient(mut self, recipient_username: impl Into<String>) -> Self {
        self.recipient_username = recipient_username.into();
        self
    }

    pub fn note(mut self, note: i32) -> Self {
        self.note = note;
        self
    }

    pub fn commentaire(mut self, commentaire: impl Into<String>) -> Self {
        self.commentaire = Some(commentaire.into());
        self
    }

    pub async fn build(self) -> Result<entity::avis::Model, DbErr> {
        entity::avis::ActiveModel {
            author_username: ActiveValue::Set(self.author_username),
            recipient_username: ActiveValue::Set(self.recipient_username),
            note: ActiveValue::Set(self.note),
            commentaire: ActiveValue::Set(self.commentaire),
            created_at: ActiveValue::Set(timestamp(next_id() as i64)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rating from `author` to `recipient` with the given note.
pub async fn create_avis(
    db: &DatabaseConnection,
    author: &str,
    recipient: &str,
    note: i32,
) -> Result<entity::avis::Model, DbErr> {
    AvisFactory::new(db)
        .author(author)
        .recipient(recipient)
        .note(note)
        .build()
        .await
}
