use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementDto {
    pub id: i32,
    pub owner_username: String,
    pub title: String,
    pub description: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remuneration: Option<i32>,
    /// `Open` or `Closed`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub description: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub remuneration: Option<i32>,
}

/// Full replacement of an announcement, including its status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAnnouncementDto {
    pub title: String,
    pub description: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub remuneration: Option<i32>,
    /// `Open` or `Closed`
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAnnouncementsDto {
    pub announcements: Vec<AnnouncementDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnnouncementFilterParams {
    /// Restrict the listing to a single city
    #[serde(default)]
    pub city: Option<String>,
}
