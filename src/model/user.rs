use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields supplied on creation and on full replacement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertUserDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}
