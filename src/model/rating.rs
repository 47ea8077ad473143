use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingDto {
    pub id: i32,
    pub author_username: String,
    pub recipient_username: String,
    pub note: i32,
    pub commentaire: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRatingDto {
    pub recipient_username: String,
    /// Between 1 and 5
    pub note: i32,
    #[serde(default)]
    pub commentaire: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingSummaryDto {
    pub recipient_username: String,
    /// Mean note, absent when the user has never been rated
    pub average: Option<f64>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRatingsDto {
    pub ratings: Vec<RatingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
