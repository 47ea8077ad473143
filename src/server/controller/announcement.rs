use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        announcement::{
            AnnouncementDto, AnnouncementFilterParams, CreateAnnouncementDto,
            PaginatedAnnouncementsDto, UpdateAnnouncementDto,
        },
        api::{ErrorDto, PaginationParams},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        model::{
            announcement::{
                CreateAnnouncementParams, GetAnnouncementsParams, UpdateAnnouncementParams,
            },
            pagination::PageParams,
        },
        service::announcement::AnnouncementService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath, ValidatedQuery},
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcements";

/// Publish a new announcement.
///
/// The caller becomes the owner and the announcement starts in the `Open` status.
///
/// # Returns
/// - `201 Created` - Announcement published
/// - `400 Bad Request` - Empty title, end date before start date, or negative remuneration
/// - `401 Unauthorized` - No caller identity
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement published", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAnnouncementParams::from_dto(caller.0, payload)?;
    let announcement = AnnouncementService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// List announcements, newest first.
///
/// Public endpoint. The optional `city` filter matches the city exactly.
///
/// # Returns
/// - `200 OK` - Requested page of announcements
/// - `400 Bad Request` - `per_page` outside 1..=100
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(PaginationParams, AnnouncementFilterParams),
    responses(
        (status = 200, description = "Page of announcements", body = PaginatedAnnouncementsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_announcements(
    State(state): State<AppState>,
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
    ValidatedQuery(filter): ValidatedQuery<AnnouncementFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let params = GetAnnouncementsParams {
        page: PageParams::from_dto(pagination)?,
        city: filter.city.filter(|c| !c.trim().is_empty()),
    };

    let announcements = AnnouncementService::new(&state.db)
        .get_paginated(params)
        .await?;

    Ok((StatusCode::OK, Json(announcements.into_dto())))
}

/// List the caller's own announcements, newest first.
#[utoipa::path(
    get,
    path = "/api/announcements/mine",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "Caller's announcements", body = Vec<AnnouncementDto>),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_announcements(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db)
        .get_by_owner(caller.username())
        .await?;

    let dto: Vec<_> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get an announcement by id. Public endpoint.
#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Announcement found", body = AnnouncementDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Replace an announcement.
///
/// # Access Control
/// - Owner only
///
/// # Returns
/// - `200 OK` - Updated announcement
/// - `400 Bad Request` - Invalid fields or unknown status
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - Unknown announcement
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAnnouncementParams::from_dto(id, payload)?;
    let announcement = AnnouncementService::new(&state.db)
        .update(&caller, params)
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Delete an announcement along with its applications and favorites.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AnnouncementService::new(&state.db)
        .delete(&caller, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
