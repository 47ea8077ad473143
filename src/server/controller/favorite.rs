use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{AddFavoriteDto, FavoriteDto, FavoriteStatusDto},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        service::favorite::FavoriteService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath},
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorites";

/// Bookmark an announcement.
///
/// # Returns
/// - `201 Created` - Bookmark added
/// - `404 Not Found` - Unknown announcement
/// - `409 Conflict` - Already bookmarked
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Bookmark added", body = FavoriteDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 409, description = "Already bookmarked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db)
        .add(caller.username(), payload.announcement_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

/// List the caller's bookmarks, newest first.
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Caller's bookmarks", body = Vec<FavoriteDto>),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .get_by_user(caller.username())
        .await?;

    let dto: Vec<_> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Check whether the caller bookmarked an announcement.
#[utoipa::path(
    get,
    path = "/api/favorites/{announcement_id}",
    tag = FAVORITE_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Bookmark status", body = FavoriteStatusDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_status(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(announcement_id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db)
        .is_favorite(caller.username(), announcement_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteStatusDto { favorite })))
}

/// Remove a bookmark.
#[utoipa::path(
    delete,
    path = "/api/favorites/{announcement_id}",
    tag = FAVORITE_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 204, description = "Bookmark removed"),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Announcement was not bookmarked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(announcement_id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove(caller.username(), announcement_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
