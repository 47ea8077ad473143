use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        rating::{CreateRatingDto, PaginatedRatingsDto, RatingDto, RatingSummaryDto},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        model::{pagination::PageParams, rating::CreateRatingParams},
        service::rating::RatingService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath, ValidatedQuery},
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "ratings";

/// Rate another user.
///
/// # Returns
/// - `201 Created` - Rating recorded
/// - `400 Bad Request` - Note outside 1..=5, or the caller rated themself
/// - `409 Conflict` - The caller already rated this user
#[utoipa::path(
    post,
    path = "/api/ratings",
    tag = RATING_TAG,
    request_body = CreateRatingDto,
    responses(
        (status = 201, description = "Rating recorded", body = RatingDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 409, description = "User already rated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rating(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateRatingParams::from_dto(caller.0, payload)?;
    let rating = RatingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(rating.into_dto())))
}

/// List the ratings a user received, newest first. Public endpoint.
#[utoipa::path(
    get,
    path = "/api/ratings/user/{username}",
    tag = RATING_TAG,
    params(
        ("username" = String, Path, description = "Rated user"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of ratings", body = PaginatedRatingsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_ratings(
    State(state): State<AppState>,
    ValidatedPath(username): ValidatedPath<String>,
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParams::from_dto(pagination)?;
    let ratings = RatingService::new(&state.db)
        .get_by_recipient(&username, page)
        .await?;

    Ok((StatusCode::OK, Json(ratings.into_dto())))
}

/// Average note and rating count of a user. Public endpoint.
#[utoipa::path(
    get,
    path = "/api/ratings/user/{username}/summary",
    tag = RATING_TAG,
    params(
        ("username" = String, Path, description = "Rated user")
    ),
    responses(
        (status = 200, description = "Rating summary", body = RatingSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_rating_summary(
    State(state): State<AppState>,
    ValidatedPath(username): ValidatedPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = RatingService::new(&state.db).summary(&username).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Delete a rating.
///
/// # Access Control
/// - Author only
#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    tag = RATING_TAG,
    params(
        ("id" = i32, Path, description = "Rating ID")
    ),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Rating not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    RatingService::new(&state.db).delete(&caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
