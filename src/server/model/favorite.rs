use chrono::{DateTime, Utc};

use crate::model::favorite::FavoriteDto;

/// An announcement bookmarked by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub username: String,
    pub announcement_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            announcement_id: self.announcement_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            announcement_id: entity.announcement_id,
            created_at: entity.created_at,
        }
    }
}
